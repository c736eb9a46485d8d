use anuvad::{AudioPayload, AudioTranslator, Provider, ProviderConfig};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt::init();

    let path = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: translate_audio <audio-file>"))?;
    let data = std::fs::read(&path)?;

    let api_key = std::env::var("GEMINI_API_KEY")?;
    let provider = Provider::from_env()?;
    let config = ProviderConfig::from_env();

    let translator = AudioTranslator::new();
    let audio = AudioPayload::new(data, "audio/webm");

    let result = translator
        .transcribe_and_translate(&audio, &api_key, "English", provider, &config)
        .await?;

    println!("Nepali:  {}", result.source_text);
    println!("English: {}", result.translated_text);

    Ok(())
}
