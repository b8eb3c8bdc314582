//! End-to-end runs of the application with a headless dashboard.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::{Duration, Instant};

use ratatui::backend::TestBackend;
use ratatui::Terminal;
use rigsim::{AppConfig, Application, NoiseMode};
use rigsim_core::{SensorReading, DEPTH_MAX_M, DEPTH_MIN_M};
use rigsim_dashboard::{
    DashboardAction, DashboardDriver, DashboardResult, ExitReason, KeySource,
};
use rigsim_feed::SensorState;

/// Quits once the shared state has moved past the start-up reading and a
/// minimum number of frames has been drawn.
struct QuitWhenUpdated {
    state: Arc<SensorState>,
    polls: u32,
    min_polls: u32,
    deadline: Instant,
}

impl KeySource for QuitWhenUpdated {
    fn next_action(&mut self, _timeout: Duration) -> DashboardResult<Option<DashboardAction>> {
        thread::sleep(Duration::from_millis(10));
        self.polls += 1;
        let updated = self.state.snapshot() != SensorReading::INITIAL;
        if (updated && self.polls >= self.min_polls) || Instant::now() > self.deadline {
            return Ok(Some(DashboardAction::Quit));
        }
        Ok(None)
    }
}

fn fast_config(noise: NoiseMode) -> AppConfig {
    let mut config = AppConfig::default();
    config.sensor.update_interval_ms = 10;
    config.sensor.noise = noise;
    config.dashboard.refresh_interval_ms = 10;
    config
}

fn headless(
    state: Arc<SensorState>,
    min_polls: u32,
) -> impl FnOnce(DashboardDriver) -> DashboardResult<ExitReason> + Send + 'static {
    move |driver| {
        let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
        let mut keys = QuitWhenUpdated {
            state,
            polls: 0,
            min_polls,
            deadline: Instant::now() + Duration::from_secs(5),
        };
        driver.run_loop(&mut terminal, &mut keys)
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_quit_key_stops_application() {
    let app = Application::new(fast_config(NoiseMode::Zero)).unwrap();
    let state = app.state();

    let reason = app.run_with(headless(state.clone(), 5)).await.unwrap();

    assert_eq!(reason, ExitReason::Quit);
    let reading = state.snapshot();
    assert_eq!(reading.depth, 50.0);
    assert_eq!(reading.temperature, 20.0);
    assert_eq!(reading.pressure, 6.0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_state_freezes_after_shutdown() {
    let mut config = fast_config(NoiseMode::Random);
    config.sensor.seed = Some(17);
    let app = Application::new(config).unwrap();
    let state = app.state();

    app.run_with(headless(state.clone(), 10)).await.unwrap();

    let frozen = state.snapshot();
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(state.snapshot(), frozen);
    assert!((DEPTH_MIN_M..=DEPTH_MAX_M).contains(&frozen.depth));
    assert!(frozen.is_consistent());
}

/// Blocks on the first poll for `stall`, then quits.
struct StalledKeys {
    stall: Duration,
    polls: u32,
}

impl KeySource for StalledKeys {
    fn next_action(&mut self, _timeout: Duration) -> DashboardResult<Option<DashboardAction>> {
        self.polls += 1;
        if self.polls == 1 {
            thread::sleep(self.stall);
            return Ok(None);
        }
        Ok(Some(DashboardAction::Quit))
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_stalled_dashboard_does_not_delay_updates() {
    let mut config = fast_config(NoiseMode::Random);
    config.sensor.seed = Some(23);
    let app = Application::new(config).unwrap();
    let (views_tx, views_rx) = mpsc::channel();

    let reason = app
        .run_with(move |driver| {
            let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
            let mut keys = StalledKeys {
                stall: Duration::from_millis(300),
                polls: 0,
            };
            let before = driver.collect_view();
            let reason = driver.run_loop(&mut terminal, &mut keys);
            let after = driver.collect_view();
            let _ = views_tx.send((before, after));
            reason
        })
        .await
        .unwrap();
    assert_eq!(reason, ExitReason::Quit);

    let (before, after) = views_rx.recv().unwrap();
    let advanced = after.ticks - before.ticks;
    // 300 ms at a 10 ms period, with slack for a loaded machine
    assert!(advanced >= 10, "only {advanced} updates during a 300ms stall");
    assert!(after.updater_live);
    assert_ne!(after.reading, before.reading);
    assert!(after.reading.is_consistent());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_interrupt_key_reports_interrupted() {
    let app = Application::new(fast_config(NoiseMode::Zero)).unwrap();

    let reason = app
        .run_with(|driver| {
            struct InterruptNow;
            impl KeySource for InterruptNow {
                fn next_action(
                    &mut self,
                    _timeout: Duration,
                ) -> DashboardResult<Option<DashboardAction>> {
                    Ok(Some(DashboardAction::Interrupt))
                }
            }
            let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
            driver.run_loop(&mut terminal, &mut InterruptNow)
        })
        .await
        .unwrap();

    assert_eq!(reason, ExitReason::Interrupted);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_readers_see_whole_readings_while_app_runs() {
    let app = Application::new(fast_config(NoiseMode::Random)).unwrap();
    let state = app.state();
    let stop = Arc::new(AtomicBool::new(false));

    let readers: Vec<_> = (0..3)
        .map(|_| {
            let state = state.clone();
            let stop = stop.clone();
            thread::spawn(move || {
                let mut seen = 0u64;
                while !stop.load(Ordering::Acquire) {
                    let reading = state.snapshot();
                    assert!(
                        reading == SensorReading::INITIAL || reading.is_consistent(),
                        "torn reading: {reading}"
                    );
                    seen += 1;
                }
                seen
            })
        })
        .collect();

    app.run_with(headless(state.clone(), 20)).await.unwrap();
    stop.store(true, Ordering::Release);

    for r in readers {
        assert!(r.join().unwrap() > 0);
    }
}
