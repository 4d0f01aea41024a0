//! Per-site strategy chain: static strategies in priority order, with
//! optional escalation to the rendering fallback.

use chrono::{SecondsFormat, Utc};

use suq_core::{Listing, RenderMode};

use crate::strategy::DiscoveryStrategy;

/// Accumulated-record count at which the chain stops trying further
/// strategies for a site.
pub const SUFFICIENT_COUNT: usize = 50;

/// Under `auto` escalation, static results below this count trigger the
/// rendering fallback.
pub const MIN_STATIC_COUNT: usize = 10;

/// What one site's chain produced: the accumulated listings plus a
/// timestamped textual log of which strategies ran and what they yielded.
pub struct ChainOutcome {
    pub listings: Vec<Listing>,
    pub log: Vec<String>,
}

/// Ordered strategy chain for one site.
///
/// A site moves through the chain as: try static strategies in priority
/// order, stop early once enough listings accumulated, escalate to the
/// rendering strategy according to the configured mode. Every strategy
/// invocation is isolated: a failure becomes a log line and the chain
/// proceeds.
pub struct StrategyChain {
    static_strategies: Vec<Box<dyn DiscoveryStrategy>>,
    render_strategy: Option<Box<dyn DiscoveryStrategy>>,
    render_mode: RenderMode,
}

impl StrategyChain {
    #[must_use]
    pub fn new(
        static_strategies: Vec<Box<dyn DiscoveryStrategy>>,
        render_strategy: Option<Box<dyn DiscoveryStrategy>>,
        render_mode: RenderMode,
    ) -> Self {
        Self {
            static_strategies,
            render_strategy,
            render_mode,
        }
    }

    /// Runs the chain to completion for one site.
    pub async fn run(&self, keywords: &[String], limit: usize) -> ChainOutcome {
        let mut listings = Vec::new();
        let mut log = Vec::new();

        match (self.render_mode, &self.render_strategy) {
            (RenderMode::Always, Some(render)) => {
                log_line(&mut log, "Render mode = always; trying render first".to_owned());
                run_one(render.as_ref(), keywords, limit, &mut listings, &mut log).await;
                if listings.len() < SUFFICIENT_COUNT {
                    self.run_statics(keywords, limit, &mut listings, &mut log).await;
                }
            }
            _ => {
                self.run_statics(keywords, limit, &mut listings, &mut log).await;
                if self.render_mode == RenderMode::Auto && listings.len() < MIN_STATIC_COUNT {
                    if let Some(render) = &self.render_strategy {
                        log_line(
                            &mut log,
                            "Static strategies yielded few/none; falling back to render"
                                .to_owned(),
                        );
                        run_one(render.as_ref(), keywords, limit, &mut listings, &mut log)
                            .await;
                    }
                }
            }
        }

        ChainOutcome { listings, log }
    }

    async fn run_statics(
        &self,
        keywords: &[String],
        limit: usize,
        listings: &mut Vec<Listing>,
        log: &mut Vec<String>,
    ) {
        for strategy in &self.static_strategies {
            run_one(strategy.as_ref(), keywords, limit, listings, log).await;
            if listings.len() >= SUFFICIENT_COUNT {
                break;
            }
        }
    }
}

/// Invokes one strategy, extending `listings` on success and logging the
/// failure otherwise. Never propagates the error; strategy isolation is
/// the chain's contract.
async fn run_one(
    strategy: &dyn DiscoveryStrategy,
    keywords: &[String],
    limit: usize,
    listings: &mut Vec<Listing>,
    log: &mut Vec<String>,
) {
    log_line(log, format!("Trying {}", strategy.name()));
    match strategy.search(keywords, limit).await {
        Ok(got) => {
            tracing::info!(strategy = strategy.name(), count = got.len(), "strategy finished");
            log_line(log, format!("{} yielded {} items", strategy.name(), got.len()));
            listings.extend(got);
        }
        Err(e) => {
            tracing::warn!(strategy = strategy.name(), error = %e, "strategy failed");
            log_line(log, format!("ERROR {}: {e}", strategy.name()));
        }
    }
}

fn log_line(log: &mut Vec<String>, message: String) {
    let ts = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
    log.push(format!("[{ts}] {message}"));
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod tests;
