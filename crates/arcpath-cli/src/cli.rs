use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use arcpath_app::{Algorithm, PathResult, Reveal, compute_path_with};
use arcpath_core::Params;
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "arcpath",
    version,
    about = "Shortest path between the outer corners of a half-annulus grid"
)]
pub struct Args {
    /// Number of angular points (K, at least 2)
    #[arg(short = 'k', long = "angular")]
    pub k: Option<usize>,

    /// Number of radial points (H, at least 2)
    #[arg(short = 'r', long = "radial")]
    pub h: Option<usize>,

    /// Inner radius (I)
    #[arg(short = 'i', long = "inner")]
    pub inner: Option<f64>,

    /// Outer radius (O, greater than the inner radius)
    #[arg(short = 'o', long = "outer")]
    pub outer: Option<f64>,

    /// Search engine
    #[arg(short = 'a', long = "algorithm", value_enum, default_value = "dijkstra")]
    pub algorithm: AlgorithmArg,

    /// JSON file with any of "k", "h", "inner", "outer"
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Print the full result as JSON
    #[arg(long = "json")]
    pub json: bool,

    /// Print the path as progressive frames revealing STEP nodes each
    #[arg(long = "reveal", value_name = "STEP", conflicts_with = "json")]
    pub reveal: Option<usize>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmArg {
    Dijkstra,
    Astar,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(a: AlgorithmArg) -> Self {
        match a {
            AlgorithmArg::Dijkstra => Algorithm::Dijkstra,
            AlgorithmArg::Astar => Algorithm::Astar,
        }
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let base = match args.config.as_deref() {
        Some(path) => load_config(path)?,
        None => Params::default(),
    };
    let params = resolve_params(&args, base);
    let algorithm = Algorithm::from(args.algorithm);
    log::info!("computing {algorithm} path for {params}");

    let result = compute_path_with(params, algorithm)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        if let Some(step) = args.reveal {
            for line in reveal_lines(&result, step) {
                println!("{line}");
            }
        }
        println!("{}", summary(&result));
    }
    Ok(())
}

/// Read a parameter set from a JSON file. Missing fields keep their defaults.
pub fn load_config(path: &Path) -> Result<Params, Box<dyn Error>> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("failed to read config {}: {e}", path.display()))?;
    let params = serde_json::from_str::<Params>(&text)
        .map_err(|e| format!("failed to parse config {}: {e}", path.display()))?;
    log::info!("loaded config from {}", path.display());
    Ok(params)
}

/// Flags override the config file, which overrides the defaults.
pub fn resolve_params(args: &Args, base: Params) -> Params {
    Params {
        k: args.k.unwrap_or(base.k),
        h: args.h.unwrap_or(base.h),
        inner: args.inner.unwrap_or(base.inner),
        outer: args.outer.unwrap_or(base.outer),
    }
}

pub fn summary(result: &PathResult) -> String {
    match result.total_length {
        Some(len) => format!("The length of the shortest path is: {len:.6} meters."),
        None => "A path to the goal could not be found.".to_string(),
    }
}

pub fn reveal_lines(result: &PathResult, step: usize) -> Vec<String> {
    Reveal::with_step(&result.nodes, step)
        .enumerate()
        .filter_map(|(frame, prefix)| {
            let tip = prefix.last()?;
            Some(format!(
                "frame {:>4}: {:>4} nodes, tip ({}, {}) at ({:.6}, {:.6})",
                frame + 1,
                prefix.len(),
                tip.i,
                tip.j,
                tip.x,
                tip.y
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcpath_app::compute_path;

    #[test]
    fn flags_override_config() {
        let args = Args::try_parse_from(["arcpath", "-k", "16", "--outer", "12.5"]).unwrap();
        let base = Params::new(64, 8, 3.0, 4.0);
        let p = resolve_params(&args, base);
        assert_eq!(p, Params::new(16, 8, 3.0, 12.5));
        assert_eq!(args.algorithm, AlgorithmArg::Dijkstra);
    }

    #[test]
    fn defaults_match_the_track() {
        let args = Args::try_parse_from(["arcpath", "--algorithm", "astar"]).unwrap();
        assert_eq!(resolve_params(&args, Params::default()), Params::default());
        assert_eq!(Algorithm::from(args.algorithm), Algorithm::Astar);
    }

    #[test]
    fn reveal_and_json_conflict() {
        let err = Args::try_parse_from(["arcpath", "--json", "--reveal", "4"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
        assert!(Args::try_parse_from(["arcpath", "--reveal", "4"]).is_ok());
    }

    #[test]
    fn config_file_is_read() {
        let path = std::env::temp_dir().join(format!("arcpath-config-{}.json", std::process::id()));
        fs::write(&path, r#"{"k": 12, "inner": 2.0}"#).unwrap();
        let p = load_config(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(p.k, 12);
        assert_eq!(p.inner, 2.0);
        assert_eq!(p.h, Params::default().h);
    }

    #[test]
    fn missing_config_is_an_error() {
        let err = load_config(Path::new("/nonexistent/arcpath.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }

    #[test]
    fn summary_lines() {
        let r = compute_path(Params::new(3, 2, 1.0, 2.0)).unwrap();
        assert_eq!(
            summary(&r),
            format!("The length of the shortest path is: {:.6} meters.", 2.0 * 5f64.sqrt())
        );
        assert_eq!(
            summary(&PathResult::default()),
            "A path to the goal could not be found."
        );
    }

    #[test]
    fn reveal_frames_end_at_destination() {
        let r = compute_path(Params::new(4, 2, 1.0, 2.0)).unwrap();
        let lines = reveal_lines(&r, 3);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("tip (1, 3)"));
    }
}
