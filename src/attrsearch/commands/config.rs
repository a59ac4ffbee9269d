use crate::commands::{CmdMessage, CmdResult, SearchPaths};
use crate::config::SearchConfig;
use crate::error::{Result, SearchError};

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &SearchPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.state_dir;
    match action {
        ConfigAction::ShowAll => {
            let config = SearchConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = SearchConfig::load(dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = SearchConfig::load(dir)?;
            match config.set(&key, &value) {
                Ok(()) => {}
                Err(SearchError::Config(msg)) => {
                    let mut result = CmdResult::default();
                    result.add_message(CmdMessage::error(msg));
                    return Ok(result);
                }
                Err(e) => return Err(e),
            }
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}
