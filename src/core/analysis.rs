use async_openai::{
    self,
    types::responses::{
        CreateResponseArgs, EasyInputMessageArgs, InputItem, InputParam, OutputItem,
        OutputMessageContent, Role,
    },
};
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const FALLBACK_RATING: u8 = 7;
const FALLBACK_EXPLANATION: &str = "Analysis completed but rating could not be parsed";

/// The shape the model is asked to produce. Decoding is best-effort; see
/// [`parse_analysis`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoAnalysis {
    pub summary: String,
    pub rating: u8,
    #[serde(rename = "ratingExplanation")]
    pub rating_explanation: String,
}

/// Thin client over the chat-completion collaborator. The model is an opaque
/// `prompt -> text` function; everything interesting happens in the prompt and
/// in the decoding of the reply.
#[derive(Clone)]
pub struct AnalysisService {
    client: async_openai::Client<async_openai::config::OpenAIConfig>,
    model: String,
}

impl AnalysisService {
    pub fn new(model: String) -> Self {
        Self {
            client: async_openai::Client::new(),
            model,
        }
    }

    pub async fn analyze(&self, transcript: &str) -> Result<VideoAnalysis> {
        let request = CreateResponseArgs::default()
            .model(self.model.as_str())
            .input(InputParam::Items(vec![InputItem::EasyMessage(
                EasyInputMessageArgs::default()
                    .role(Role::User)
                    .content(analysis_prompt(transcript))
                    .build()?,
            )]))
            .build()?;

        let response = self.client.responses().create(request).await?;

        let mut content = String::new();
        for output in response.output {
            if let OutputItem::Message(message) = output {
                for part in message.content {
                    if let OutputMessageContent::OutputText(text) = part {
                        content.push_str(&text.text);
                    }
                }
            }
        }

        Ok(parse_analysis(&content))
    }
}

fn analysis_prompt(transcript: &str) -> String {
    format!(
        r#"Please analyze the following YouTube video transcript and provide:
1. A comprehensive summary (2-3 paragraphs)
2. A rating from 1-10 (where 10 is excellent)
3. An explanation for the rating

Transcript: {transcript}

Please format your response as JSON with the following structure:
{{
  "summary": "your summary here",
  "rating": number,
  "ratingExplanation": "explanation for the rating"
}}"#
    )
}

/// Best-effort decode of the model's reply. The model is asked for bare JSON
/// but may wrap it in a markdown code fence or ignore the instruction
/// entirely; in the latter case the raw text becomes the summary and the
/// rating falls back to a neutral default. Never fails.
pub fn parse_analysis(raw: &str) -> VideoAnalysis {
    match serde_json::from_str(strip_code_fence(raw)) {
        Ok(analysis) => analysis,
        Err(_) => VideoAnalysis {
            summary: raw.to_string(),
            rating: FALLBACK_RATING,
            rating_explanation: FALLBACK_EXPLANATION.to_string(),
        },
    }
}

fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json", if any) up to the end of the first line.
    let body = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => rest,
    };
    body.strip_suffix("```").unwrap_or(body).trim()
}
