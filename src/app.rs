use std::time::Duration;

use instant::Instant;

use crate::config::SimConfig;
use crate::events::PanelEvent;
use crate::panel::{PanelOptions, PetPanel};
use crate::persist::{MemoryState, WebviewMessage};

/// Max accumulated time before we clamp (prevents spiral of death).
const MAX_ACCUMULATOR: f64 = 0.25;
/// How many extra pets to ask for on startup.
const INITIAL_PET_COUNT: usize = 4;
/// How often to log FPS (seconds).
const FPS_LOG_INTERVAL: f64 = 5.0;
/// How long the headless run lasts unless told otherwise (seconds).
const DEFAULT_RUN_SECONDS: f64 = 30.0;
/// Ticks between ball throws.
const BALL_INTERVAL_TICKS: u64 = 600;

// ---------------------------------------------------------------------------
// Frame timing
// ---------------------------------------------------------------------------

struct FrameStats {
    frame_count: u64,
    last_log_time: Instant,
    frame_time_sum: f64,
    frame_time_min: f64,
    frame_time_max: f64,
    frames_since_log: u32,
}

impl FrameStats {
    fn new() -> Self {
        Self {
            frame_count: 0,
            last_log_time: Instant::now(),
            frame_time_sum: 0.0,
            frame_time_min: f64::MAX,
            frame_time_max: 0.0,
            frames_since_log: 0,
        }
    }

    /// Returns true when a stats line was just logged.
    fn record_frame(&mut self, dt: f64) -> bool {
        self.frame_count += 1;
        self.frames_since_log += 1;
        self.frame_time_sum += dt;
        self.frame_time_min = self.frame_time_min.min(dt);
        self.frame_time_max = self.frame_time_max.max(dt);

        let elapsed = self.last_log_time.elapsed().as_secs_f64();
        if elapsed < FPS_LOG_INTERVAL {
            return false;
        }
        let avg_ms = (self.frame_time_sum / self.frames_since_log as f64) * 1000.0;
        let fps = self.frames_since_log as f64 / elapsed;
        log::info!(
            "FPS: {:.0} | avg: {:.2}ms | min: {:.2}ms | max: {:.2}ms | total frames: {}",
            fps,
            avg_ms,
            self.frame_time_min * 1000.0,
            self.frame_time_max * 1000.0,
            self.frame_count,
        );
        self.last_log_time = Instant::now();
        self.frame_time_sum = 0.0;
        self.frame_time_min = f64::MAX;
        self.frame_time_max = 0.0;
        self.frames_since_log = 0;
        true
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

/// Headless host: drives a panel at a fixed tick rate and logs what it says.
struct App {
    panel: PetPanel<MemoryState>,

    // Fixed timestep
    tick_rate: f64,
    last_frame_time: Option<Instant>,
    accumulator: f64,
    tick_count: u64,
    max_ticks: u64,

    // Frame timing
    frame_stats: FrameStats,
}

impl App {
    fn new(config: SimConfig, run_seconds: f64) -> Result<Self, Box<dyn std::error::Error>> {
        let tick_rate = 1.0 / config.tick_rate_hz;
        let max_ticks = (run_seconds * config.tick_rate_hz).ceil() as u64;
        let panel = PetPanel::bootstrap(
            config,
            MemoryState::new(),
            PanelOptions::default(),
            fastrand::Rng::new(),
        )?;
        Ok(Self {
            panel,
            tick_rate,
            last_frame_time: None,
            accumulator: 0.0,
            tick_count: 0,
            max_ticks,
            frame_stats: FrameStats::new(),
        })
    }

    fn queue_startup_commands(&self) {
        let kinds = ["dog", "fox", "crab", "rubber-duck", "snail", "rocky"];
        for kind in kinds.iter().cycle().take(INITIAL_PET_COUNT) {
            self.panel.push_event(PanelEvent::SpawnPet {
                kind: kind.to_string(),
                color: None,
                size: None,
                name: None,
            });
        }
        self.panel.push_event(PanelEvent::RollCall);
    }

    /// Run fixed-timestep simulation ticks.
    fn run_fixed_update(&mut self, dt: f64) {
        self.accumulator += dt;

        if self.accumulator > MAX_ACCUMULATOR {
            self.accumulator = MAX_ACCUMULATOR;
        }

        while self.accumulator >= self.tick_rate && !self.finished() {
            if self.tick_count > 0 && self.tick_count % BALL_INTERVAL_TICKS == 0 {
                self.panel.push_event(PanelEvent::ThrowBall);
            }

            let report = self.panel.tick();
            if let Some(catcher) = report.caught_ball {
                log::info!("Tick {}: {catcher} has the ball", report.frame);
            }
            for name in report.despawned {
                log::info!("Tick {}: {name} wandered off", report.frame);
            }

            self.accumulator -= self.tick_rate;
            self.tick_count += 1;
        }
    }

    fn forward_messages(&mut self) {
        for message in self.panel.host_mut().take_messages() {
            match message {
                WebviewMessage::Alert { text } => log::warn!("[alert] {text}"),
                WebviewMessage::Info { text } => log::info!("[info] {text}"),
                WebviewMessage::ListPets { text } => log::info!("[pets]\n{text}"),
            }
        }
    }

    fn finished(&self) -> bool {
        self.tick_count >= self.max_ticks
    }

    fn frame(&mut self) {
        let now = Instant::now();
        if let Some(last) = self.last_frame_time {
            let dt = now.duration_since(last).as_secs_f64();

            if self.frame_stats.record_frame(dt) {
                log::info!("Tick phases: {}", self.panel.timers().summary());
            }

            self.run_fixed_update(dt);
        }
        self.last_frame_time = Some(now);
        self.forward_messages();
    }
}

/// Entry point. Usage: `petpanel [config.json] [seconds]`.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => {
            log::info!("Loading config from {path}");
            SimConfig::from_json_file(path)?
        }
        None => SimConfig::default(),
    };
    let run_seconds = match args.next() {
        Some(s) => s.parse::<f64>()?,
        None => DEFAULT_RUN_SECONDS,
    };

    let mut app = App::new(config, run_seconds)?;
    app.queue_startup_commands();

    let pace = Duration::from_secs_f64(app.tick_rate);
    while !app.finished() {
        app.frame();
        std::thread::sleep(pace);
    }
    app.panel.push_event(PanelEvent::ListPets);
    app.panel.tick();
    app.forward_messages();

    log::info!("Ran {} ticks, {} pets left", app.tick_count, app.panel.collection().len());
    Ok(())
}
