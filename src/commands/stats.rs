use crate::{
    libs::{messages::Message, statistics::StatisticsService, view::View},
    msg_info, msg_print,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let statistics = StatisticsService::load()?;

    if statistics.is_empty() {
        msg_info!(Message::NoStatisticsYet);
        return Ok(());
    }

    msg_print!(Message::StatisticsHeader, true);
    View::statistics(&statistics)?;
    Ok(())
}
