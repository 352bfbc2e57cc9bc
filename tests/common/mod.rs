#![allow(dead_code)]

use async_trait::async_trait;
use gemini_chat_relay::services::{GenerationError, GenerativeModel};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub enum Reply {
    Text(&'static str),
    Status(u16, &'static str),
    Transport(&'static str),
    Slow(Duration),
}

/// Canned model that counts how often it was called.
pub struct StubModel {
    reply: Reply,
    calls: AtomicUsize,
}

impl StubModel {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self { reply, calls: AtomicUsize::new(0) })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GenerativeModel for StubModel {
    async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Reply::Text(text) => Ok(text.to_string()),
            Reply::Status(status, message) => Err(GenerationError::from_status(*status, *message)),
            Reply::Transport(message) => Err(GenerationError::Transport(message.to_string())),
            Reply::Slow(delay) => {
                tokio::time::sleep(*delay).await;
                Ok("too late".to_string())
            }
        }
    }

    fn model_name(&self) -> &str {
        "stub-model"
    }
}

/// Model that echoes the prompt back.
pub struct EchoModel;

#[async_trait]
impl GenerativeModel for EchoModel {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        Ok(prompt.to_string())
    }

    fn model_name(&self) -> &str {
        "echo"
    }
}
