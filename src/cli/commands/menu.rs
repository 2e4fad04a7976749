use crate::config::Config;
use crate::core::menu::MenuLogic;
use crate::errors::AppResult;

pub fn handle(cfg: &Config) -> AppResult<()> {
    MenuLogic::run(cfg)
}
