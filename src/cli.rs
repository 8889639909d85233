use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ytbrief")]
#[command(about = "YouTube transcript proxy and analyzer")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Port the transcript proxy listens on
    #[arg(short, long, env = "PORT", default_value_t = 3001, global = true)]
    pub port: u16,

    /// Preferred caption languages (comma-separated)
    #[arg(short, long, env = "YTBRIEF_LANGUAGES", default_value = "en", global = true)]
    pub languages: String,

    /// Model used for transcript analysis
    #[arg(short, long, env = "YTBRIEF_MODEL", default_value = "gpt-4o-mini", global = true)]
    pub model: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the transcript proxy server
    Serve,

    /// Fetch a transcript and print it
    Get {
        /// YouTube video URL or video ID
        video: String,
    },

    /// Fetch a transcript and analyze it with the configured model
    Analyze {
        /// YouTube video URL or video ID
        video: String,
    },
}
