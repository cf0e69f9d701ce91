use crate::domain::models::Destination;
use crate::overlay::Effect;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    FetchSuggestions { generation: u64, query: String },
    Navigate(Destination),
}

impl From<Effect> for Command {
    fn from(effect: Effect) -> Self {
        match effect {
            Effect::FetchSuggestions { generation, query } => {
                Command::FetchSuggestions { generation, query }
            }
            Effect::Navigate(destination) => Command::Navigate(destination),
        }
    }
}
