//! Twistor - exploratory projective and twistor geometry session
//!
//! Maps the configured spacetime events into twistor space, joins the first two
//! by a line, rotates it, and reports intersections, distances and the
//! Minkowski-to-twistor incidence of every event.

use twistor::config::AppConfig;
use twistor::{
    spacetime_to_twistor, twistor_mapping, Complex, ComplexMinkowskiPoint, GeometryError,
    ProjectiveLine, ProjectivePoint,
};

fn format_complex(c: Complex) -> String {
    format!("({:.2} + {:.2}i)", c.re, c.im)
}

fn format_point(p: &ProjectivePoint) -> String {
    format!(
        "w: {}, x: {}, y: {}, z: {}",
        format_complex(p.w),
        format_complex(p.x),
        format_complex(p.y),
        format_complex(p.z)
    )
}

fn run(config: &AppConfig) -> Result<(), GeometryError> {
    let demo = &config.demo;
    let points: Vec<ProjectivePoint> = demo
        .events
        .iter()
        .map(|e| spacetime_to_twistor(e[0], e[1], e[2], e[3]))
        .collect();

    for (event, point) in demo.events.iter().zip(&points) {
        println!("Event {:?} -> twistor point {}", event, format_point(point));
    }

    if let [first, second, ..] = points[..] {
        let mut line = ProjectiveLine::new(first, second)?;
        println!("Line direction: {}", format_point(&line.direction()));

        let rotation = demo.rotation()?;
        line.rotate(&rotation)?;
        println!(
            "Rotated by {:.1} degrees about {:?}:",
            demo.rotation_angle_degrees, demo.rotation_axis
        );
        println!("  A: {}", format_point(&line.point_a));
        println!("  B: {}", format_point(&line.point_b));

        let reversed = ProjectiveLine::new(second, first)?;
        let tolerance = config.geometry.intersection_tolerance;
        println!(
            "Rotated line meets reversed line: {}",
            line.intersects_within(&reversed, tolerance)
        );

        let skipped = line.normalize();
        if skipped > 0 {
            log::info!("{} endpoint(s) at infinity left unnormalized", skipped);
        }
        println!("Normalized:");
        println!("  A: {}", format_point(&line.point_a));
        println!("  B: {}", format_point(&line.point_b));
    } else {
        log::warn!("Need at least two events to build a line, got {}", points.len());
    }

    println!("Distance matrix:");
    for row in ProjectivePoint::compute_distance_matrix(&points) {
        let cells: Vec<String> = row.iter().map(|d| format!("{:8.2}", d)).collect();
        println!("  {}", cells.join(" "));
    }

    let lambda = demo.lambda();
    for event in &demo.events {
        let minkowski = ComplexMinkowskiPoint::new(event[0], event[1], event[2], event[3]);
        let twistor = twistor_mapping(&minkowski, lambda);
        println!(
            "Event {:?} -> mu = [{}, {}]",
            event,
            format_complex(twistor.mu.first()),
            format_complex(twistor.mu.second())
        );
    }

    Ok(())
}

fn main() {
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();

    if let Some(e) = load_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting twistor session with {} events", config.demo.events.len());

    if let Err(e) = run(&config) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
