use crate::{db::db::Db, libs::messages::Message, msg_error, msg_info, msg_success};
use anyhow::Result;

pub fn cmd(db: &Db) -> Result<()> {
    match db.commit() {
        Ok(true) => msg_success!(Message::ChangesCommitted),
        Ok(false) => msg_info!(Message::NothingToCommit),
        Err(e) => msg_error!(e),
    }
    Ok(())
}
