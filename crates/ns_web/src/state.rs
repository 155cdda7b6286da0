use std::sync::Arc;

use ns_analysis::NewsPipeline;
use ns_speech::SpeechService;

pub struct AppState {
    pub pipeline: Arc<NewsPipeline>,
    pub speech: Arc<SpeechService>,
}
