mod groq_whisper_engine;
mod mock_engine;

pub use groq_whisper_engine::GroqWhisperEngine;
pub use mock_engine::MockTranscriptionEngine;
