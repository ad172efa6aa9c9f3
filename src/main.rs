use std::sync::Arc;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;

use voiceloop::{Assistant, ElevenLabsMouth, OpenAiClient, Settings, WhisperTranscriber};

#[derive(Parser, Debug)]
#[command(name = "voiceloop", about = "VoiceLoop HR assistant console")]
struct Cli {
    /// Logging verbosity (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: tracing::Level,

    /// Base URL of the OpenAI-compatible API
    #[arg(long, env = "OPENAI_BASE_URL")]
    openai_base_url: Option<String>,

    /// How many recent messages accompany a chat call
    #[arg(long)]
    tail: Option<usize>,

    /// Disable text-to-speech even when an ElevenLabs key is configured
    #[arg(long)]
    no_tts: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .init();

    let mut settings = Settings::from_env();
    if let Some(base) = cli.openai_base_url {
        settings.openai_base_url = base;
    }
    if let Some(tail) = cli.tail {
        settings.conversation_tail = tail;
    }

    let mut assistant = Assistant::new(settings.conversation_tail);
    if let Some(key) = settings.openai_api_key.as_deref() {
        let client = Arc::new(OpenAiClient::new(&settings.openai_base_url, key));
        assistant = assistant
            .chat_client(client)
            .transcriber(Arc::new(WhisperTranscriber::new(
                &settings.openai_base_url,
                key,
            )));
    } else {
        info!("no OpenAI key configured; unmatched utterances get the canned fallback");
    }
    if !cli.no_tts {
        if let Some(key) = settings.elevenlabs_api_key.as_deref() {
            assistant = assistant.mouth(Arc::new(ElevenLabsMouth::new(
                &settings.elevenlabs_base_url,
                key,
                &settings.voice_id,
            )));
        }
    }

    let mut stdout = tokio::io::stdout();
    stdout
        .write_all(b"VoiceLoop console. Type a command, 'clear' to reset, or 'exit'.\n")
        .await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        match line.trim() {
            "exit" | "quit" => break,
            "clear" => {
                assistant.clear_conversation();
                stdout.write_all(b"Conversation cleared.\n").await?;
            }
            input => {
                if let Some(reply) = assistant.handle_utterance(input).await {
                    stdout.write_all(reply.as_bytes()).await?;
                    stdout.write_all(b"\n").await?;
                }
            }
        }
    }
    Ok(())
}
