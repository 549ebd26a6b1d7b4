#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::{atomic::{AtomicUsize, Ordering}, Arc};
use std::time::Duration;

use landing_builder::models::ContentRecord;
use landing_builder::provider::{AdapterError, DynAdapter, ProviderAdapter, ResponseShape};

pub const GOOD_REPLY: &str = "Here is your page.\n\nHTML_CODE_START\n<h1>Widget</h1>\nHTML_CODE_END\n\nCSS_CODE_START\nh1 { color: #3B82F6; }\nCSS_CODE_END\n";

#[derive(Clone)]
pub enum Reply {
    Text(&'static str),
    Transport,
    Mismatch,
    Slow(Duration, &'static str),
}

/// Adapter that answers from a script and counts how often it was asked.
pub struct Scripted {
    id: String,
    reply: Reply,
    calls: Arc<AtomicUsize>,
}

impl Scripted {
    pub fn new(id: &str, reply: Reply) -> (DynAdapter, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let adapter = Scripted { id: id.to_string(), reply, calls: Arc::clone(&calls) };
        (Box::new(adapter), calls)
    }
}

#[async_trait]
impl ProviderAdapter for Scripted {
    fn id(&self) -> &str {
        &self.id
    }

    fn shape(&self) -> ResponseShape {
        ResponseShape::ChatCompletion
    }

    async fn complete(&self, _prompt: &str) -> Result<String, AdapterError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Reply::Text(text) => Ok(text.to_string()),
            Reply::Transport => Err(AdapterError::Status { status: 429, body: "quota exhausted".into() }),
            Reply::Mismatch => Err(AdapterError::ShapeMismatch("no choices".into())),
            Reply::Slow(delay, text) => {
                tokio::time::sleep(*delay).await;
                Ok(text.to_string())
            }
        }
    }
}

pub fn calls(counter: &Arc<AtomicUsize>) -> usize {
    counter.load(Ordering::SeqCst)
}

pub fn widget() -> ContentRecord {
    ContentRecord {
        product_name: "Widget".into(),
        short_description: "Great widget".into(),
        advantages: vec!["Fast".into(), "Cheap".into()],
        price: "$10".into(),
        cta_link: "https://x.test".into(),
        cta_text: "Buy".into(),
        ..ContentRecord::default()
    }
}
