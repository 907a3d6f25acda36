//! Scripted `CompletionModel` for tests. Replies are handed out in order and
//! every prompt received is recorded.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{CompletionModel, LlmError};

pub enum Reply {
    Text(String),
    /// Return the prompt itself.
    Echo,
    Fail(u16),
}

pub struct ScriptedModel {
    replies: Mutex<VecDeque<Reply>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedModel {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn texts(texts: &[&str]) -> Self {
        Self::new(texts.iter().map(|t| Reply::Text(t.to_string())).collect())
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionModel for ScriptedModel {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("ScriptedModel ran out of replies");
        match reply {
            Reply::Text(text) => Ok(text),
            Reply::Echo => Ok(prompt.to_string()),
            Reply::Fail(status) => Err(LlmError::Api {
                status,
                message: "scripted failure".to_string(),
            }),
        }
    }
}
