use anuvad::{Provider, ProviderConfig, TranslationDispatcher};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt::init();

    // Expects a local Ollama server with llama2 pulled.
    let dispatcher = TranslationDispatcher::new();
    let config = ProviderConfig::default();

    let english = dispatcher
        .translate("नमस्ते, तपाईंलाई कस्तो छ?", "English", Provider::Ollama, &config)
        .await?;

    println!("{english}");

    Ok(())
}
