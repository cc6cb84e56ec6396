//! GameMaster level lifecycle.
//!
//! Starting, restarting or resuming a level moves the whole trading context
//! to the level's account, first venue and first ticker in one write.
//! Stopping or judging a level clears account, venue and symbol but keeps
//! the instance id.

use tracing::info;

use super::paths;
use crate::Instance;
use crate::models::{Envelope, LevelState, Response};
use crate::session::TradingContext;

impl Instance {
    /// Starts the named level (e.g. `"first_steps"`).
    pub async fn start_level(&self, level: &str) -> Response<LevelState> {
        let state = self
            .post_empty(paths::start_level(&self.config.gm_url, level))
            .await;
        self.adopt_level(state)
    }

    /// Restarts the level identified by the current instance id.
    pub async fn restart_level(&self) -> Response<LevelState> {
        let state = self.level_action("restart").await;
        self.adopt_level(state)
    }

    /// Resumes the level identified by the current instance id.
    pub async fn resume_level(&self) -> Response<LevelState> {
        let state = self.level_action("resume").await;
        self.adopt_level(state)
    }

    /// Stops the current level.
    pub async fn stop_level(&self) -> Envelope {
        let result = self.level_action("stop").await;
        self.clear_level_context();
        result
    }

    /// Asks the GameMaster to judge the current level.
    pub async fn judge_level(&self) -> Envelope {
        let result = self.level_action("judge").await;
        self.clear_level_context();
        result
    }

    async fn level_action<R>(&self, action: &str) -> R
    where
        R: serde::de::DeserializeOwned + crate::models::ApiResponse + Default,
    {
        let instance_id = self.session.instance_id();
        self.post_empty(paths::level_action(&self.config.gm_url, instance_id, action))
            .await
    }

    fn adopt_level(&self, state: Response<LevelState>) -> Response<LevelState> {
        if state.instance_id != 0 {
            let context = TradingContext {
                instance_id: state.instance_id,
                account: state.account.clone(),
                venue: state.venues.first().cloned().unwrap_or_default(),
                symbol: state.tickers.first().cloned().unwrap_or_default(),
            };
            info!(
                instance_id = context.instance_id,
                account = %context.account,
                venue = %context.venue,
                symbol = %context.symbol,
                "Level context applied"
            );
            self.session.set_context(context);
        }
        state
    }

    fn clear_level_context(&self) {
        self.session.update_context(|context| {
            *context = TradingContext {
                instance_id: context.instance_id,
                ..TradingContext::default()
            };
        });
    }
}
