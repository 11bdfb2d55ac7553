use crate::model::translator::Translator;

pub struct AppState {
    pub translator: Translator,
}
