use std::time::Duration;

use tokio::time::sleep;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hustle_core::{DismissOutcome, EngineBuilder, InterruptState, Snapshot};

/// Initialize tracing; RUST_LOG overrides the default filter.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "hustle_core=debug,hustle_cli=info".into()),
    );
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn render_line(snapshot: &Snapshot) -> String {
    let gate = match snapshot.interrupt {
        InterruptState::Idle => "open".to_string(),
        InterruptState::Active { kind } => format!("LOCKED ({kind:?})"),
    };
    format!(
        "score={:>4}  alive={:>2}  missed={:>2}  decorations={:>3}  input={}",
        snapshot.score,
        snapshot.alive_count(),
        snapshot.missed_count(),
        snapshot.decorations.len(),
        gate
    )
}

#[tokio::main]
async fn main() {
    init_tracing();

    // (A) エンジンを構築して起動
    let engine = EngineBuilder::new()
        .viewport(1280.0, 720.0)
        .build()
        .expect("default config is valid");
    engine.start().await;
    info!("engine running; dismissing the oldest live task every 2s");

    let mut updates = engine.subscribe();

    // (B) 20 秒間スナップショットを表示しつつ、2 秒おきに一番古い
    //     生存タスクを「クリック」する
    let demo = async {
        let mut next_click = tokio::time::Instant::now() + Duration::from_secs(2);
        loop {
            if updates.changed().await.is_err() {
                break;
            }
            let snapshot = updates.borrow().clone();
            println!("{}", render_line(&snapshot));

            if tokio::time::Instant::now() >= next_click {
                next_click += Duration::from_secs(2);
                let target = snapshot.tasks.iter().find(|task| task.is_alive());
                if let Some(task) = target {
                    let outcome = engine.activate(task.id).await;
                    if outcome == DismissOutcome::Rewarded {
                        println!("  -> done: \"{}\" ({:?})", task.label, task.severity);
                    } else {
                        println!("  -> click swallowed: {outcome:?}");
                    }
                }
            }
        }
    };
    tokio::select! {
        _ = demo => {}
        _ = sleep(Duration::from_secs(20)) => {}
    }

    // (C) graceful shutdown のあと、最終状態を JSON で出力
    engine.stop().await;
    info!("engine stopped");
    let snapshot = engine.snapshot();
    println!("final: {}", render_line(&snapshot));
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("snapshot serialization failed: {err}"),
    }
}
