use super::*;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::ScrapeError;

/// Scripted strategy: yields a fixed number of listings (or fails) and
/// counts invocations.
struct StubStrategy {
    label: &'static str,
    yield_count: usize,
    fail: bool,
    calls: Arc<AtomicUsize>,
}

impl StubStrategy {
    fn yielding(label: &'static str, yield_count: usize, calls: &Arc<AtomicUsize>) -> Box<Self> {
        Box::new(Self {
            label,
            yield_count,
            fail: false,
            calls: Arc::clone(calls),
        })
    }

    fn failing(label: &'static str, calls: &Arc<AtomicUsize>) -> Box<Self> {
        Box::new(Self {
            label,
            yield_count: 0,
            fail: true,
            calls: Arc::clone(calls),
        })
    }
}

#[async_trait]
impl DiscoveryStrategy for StubStrategy {
    fn name(&self) -> &'static str {
        self.label
    }

    async fn discover_urls(&self, _limit: usize) -> Result<Vec<String>, ScrapeError> {
        Ok(Vec::new())
    }

    async fn search(
        &self,
        _keywords: &[String],
        _limit: usize,
    ) -> Result<Vec<Listing>, ScrapeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ScrapeError::UnexpectedStatus {
                status: 500,
                url: "https://s.example/x".to_owned(),
            });
        }
        Ok((0..self.yield_count)
            .map(|i| {
                let mut listing = Listing::empty(&format!("https://s.example/p/{i}"), "s.example");
                listing.name = format!("Item {i}");
                listing
            })
            .collect())
    }
}

#[tokio::test]
async fn auto_mode_escalates_when_static_yield_is_below_threshold() {
    let static_calls = Arc::new(AtomicUsize::new(0));
    let render_calls = Arc::new(AtomicUsize::new(0));
    let chain = StrategyChain::new(
        vec![StubStrategy::yielding("static", 3, &static_calls)],
        Some(StubStrategy::yielding("render", 5, &render_calls)),
        RenderMode::Auto,
    );

    let outcome = chain.run(&[], 0).await;
    assert_eq!(static_calls.load(Ordering::SeqCst), 1);
    assert_eq!(render_calls.load(Ordering::SeqCst), 1, "3 < 10 must escalate");
    assert_eq!(outcome.listings.len(), 8);
}

#[tokio::test]
async fn auto_mode_skips_render_when_static_yield_suffices() {
    let static_calls = Arc::new(AtomicUsize::new(0));
    let render_calls = Arc::new(AtomicUsize::new(0));
    let chain = StrategyChain::new(
        vec![StubStrategy::yielding("static", 12, &static_calls)],
        Some(StubStrategy::yielding("render", 5, &render_calls)),
        RenderMode::Auto,
    );

    let outcome = chain.run(&[], 0).await;
    assert_eq!(render_calls.load(Ordering::SeqCst), 0, "12 >= 10 must not escalate");
    assert_eq!(outcome.listings.len(), 12);
}

#[tokio::test]
async fn never_mode_never_invokes_render_even_when_available() {
    let static_calls = Arc::new(AtomicUsize::new(0));
    let render_calls = Arc::new(AtomicUsize::new(0));
    let chain = StrategyChain::new(
        vec![StubStrategy::yielding("static", 0, &static_calls)],
        Some(StubStrategy::yielding("render", 5, &render_calls)),
        RenderMode::Never,
    );

    let outcome = chain.run(&[], 0).await;
    assert_eq!(render_calls.load(Ordering::SeqCst), 0);
    assert!(outcome.listings.is_empty());
}

#[tokio::test]
async fn always_mode_runs_render_first_then_falls_back_to_statics() {
    let static_calls = Arc::new(AtomicUsize::new(0));
    let render_calls = Arc::new(AtomicUsize::new(0));
    let chain = StrategyChain::new(
        vec![StubStrategy::yielding("static", 4, &static_calls)],
        Some(StubStrategy::yielding("render", 3, &render_calls)),
        RenderMode::Always,
    );

    let outcome = chain.run(&[], 0).await;
    assert_eq!(render_calls.load(Ordering::SeqCst), 1);
    assert_eq!(static_calls.load(Ordering::SeqCst), 1, "3 < 50 → statics run");
    assert_eq!(outcome.listings.len(), 7);
}

#[tokio::test]
async fn always_mode_skips_statics_when_render_is_sufficient() {
    let static_calls = Arc::new(AtomicUsize::new(0));
    let render_calls = Arc::new(AtomicUsize::new(0));
    let chain = StrategyChain::new(
        vec![StubStrategy::yielding("static", 4, &static_calls)],
        Some(StubStrategy::yielding("render", SUFFICIENT_COUNT, &render_calls)),
        RenderMode::Always,
    );

    chain.run(&[], 0).await;
    assert_eq!(static_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn chain_stops_early_once_sufficient() {
    let first_calls = Arc::new(AtomicUsize::new(0));
    let second_calls = Arc::new(AtomicUsize::new(0));
    let chain = StrategyChain::new(
        vec![
            StubStrategy::yielding("first", SUFFICIENT_COUNT, &first_calls),
            StubStrategy::yielding("second", 10, &second_calls),
        ],
        None,
        RenderMode::Never,
    );

    let outcome = chain.run(&[], 0).await;
    assert_eq!(second_calls.load(Ordering::SeqCst), 0, "threshold met, stop");
    assert_eq!(outcome.listings.len(), SUFFICIENT_COUNT);
}

#[tokio::test]
async fn failing_strategy_is_logged_and_chain_proceeds() {
    let failed_calls = Arc::new(AtomicUsize::new(0));
    let next_calls = Arc::new(AtomicUsize::new(0));
    let chain = StrategyChain::new(
        vec![
            StubStrategy::failing("broken", &failed_calls),
            StubStrategy::yielding("working", 2, &next_calls),
        ],
        None,
        RenderMode::Never,
    );

    let outcome = chain.run(&[], 0).await;
    assert_eq!(next_calls.load(Ordering::SeqCst), 1);
    assert_eq!(outcome.listings.len(), 2);
    assert!(
        outcome.log.iter().any(|l| l.contains("ERROR broken")),
        "log missing error line: {:?}",
        outcome.log
    );
}

#[tokio::test]
async fn log_records_strategy_names_and_counts() {
    let calls = Arc::new(AtomicUsize::new(0));
    let chain = StrategyChain::new(
        vec![StubStrategy::yielding("OnlyStrategy", 2, &calls)],
        None,
        RenderMode::Never,
    );

    let outcome = chain.run(&[], 0).await;
    assert!(outcome.log.iter().any(|l| l.contains("Trying OnlyStrategy")));
    assert!(outcome
        .log
        .iter()
        .any(|l| l.contains("OnlyStrategy yielded 2 items")));
}
