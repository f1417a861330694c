use std::time::Duration;

use anyhow::{bail, Context, Result};

/// Demo run parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Number of simulated frames.
    pub frames: u32,
    /// Simulated frame rate.
    pub fps: f32,
    /// Fraction of the colour fade left after one second.
    pub fade: f32,
    /// Overrides `RUST_LOG` when set.
    pub log_filter: Option<String>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            frames: 60,
            fps: 60.0,
            fade: 0.05,
            log_filter: None,
        }
    }
}

impl DemoConfig {
    /// Parses `--frames N --fps F --fade K --log FILTER` (any order, all optional).
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter().map(Into::<String>::into);

        while let Some(flag) = args.next() {
            let mut value = || {
                args.next()
                    .with_context(|| format!("missing value for `{flag}`"))
            };

            match flag.as_str() {
                "--frames" => {
                    let v = value()?;
                    config.frames = v.parse().with_context(|| format!("invalid --frames `{v}`"))?;
                }
                "--fps" => {
                    let v = value()?;
                    config.fps = v.parse().with_context(|| format!("invalid --fps `{v}`"))?;
                }
                "--fade" => {
                    let v = value()?;
                    config.fade = v.parse().with_context(|| format!("invalid --fade `{v}`"))?;
                }
                "--log" => config.log_filter = Some(value()?),
                other => bail!("unknown argument `{other}`"),
            }
        }

        if config.fps.is_nan() || config.fps <= 0.0 {
            bail!("--fps must be positive, got {}", config.fps);
        }

        // The run spans `frames` intervals and the clock clamps at 4x one interval.
        config
            .frame_interval()?
            .checked_mul(config.frames.max(4))
            .with_context(|| format!("--fps {} over {} frames is too long to simulate", config.fps, config.frames))?;

        Ok(config)
    }

    /// Time per simulated frame.
    pub fn frame_interval(&self) -> Result<Duration> {
        Duration::try_from_secs_f32(1.0 / self.fps)
            .with_context(|| format!("--fps {} has no representable frame interval", self.fps))
    }
}
