use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use radix_aspect::{detect_aspect, detect_aspect_with_speeds};
use radix_core::{ALL_BODIES, Body, CalcFlags, compute_chart};
use radix_eph::EphemerisStore;
use radix_houses::{HouseSystem, compute_cusps};
use radix_search::{
    EclipseKind, LunarPhase, SearchConfig, find_nearest_station, find_next_lunar_eclipse,
    find_next_lunar_phase, find_next_solar_eclipse,
};

#[derive(Parser)]
#[command(name = "radix", about = "Chart and ephemeris toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a full chart: all bodies plus house cusps
    Chart {
        /// Julian Date (UT)
        jd: f64,
        /// Geographic longitude in degrees, east positive
        #[arg(long)]
        lon: f64,
        /// Geographic latitude in degrees, north positive
        #[arg(long)]
        lat: f64,
        /// House system name
        #[arg(long, default_value = "placidus")]
        system: String,
        /// Ephemeris data directory
        #[arg(long)]
        data: PathBuf,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Compute house cusps only (no ephemeris data needed)
    Houses {
        /// Julian Date (UT)
        jd: f64,
        /// Geographic longitude in degrees, east positive
        #[arg(long)]
        lon: f64,
        /// Geographic latitude in degrees, north positive
        #[arg(long)]
        lat: f64,
        /// House system name
        #[arg(long, default_value = "placidus")]
        system: String,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Classify the aspect between two ecliptic longitudes
    Aspect {
        /// First longitude in degrees
        lon1: f64,
        /// Second longitude in degrees
        lon2: f64,
        /// Orb in degrees
        #[arg(long, default_value = "6.0")]
        orb: f64,
        /// Longitude speed of the first body, deg/day
        #[arg(long)]
        speed1: Option<f64>,
        /// Longitude speed of the second body, deg/day
        #[arg(long)]
        speed2: Option<f64>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Find the next exact lunar phase
    NextPhase {
        /// Julian Date (UT) to search from
        jd: f64,
        /// Phase: new, first-quarter, full, last-quarter
        #[arg(long, default_value = "new")]
        phase: String,
        /// Ephemeris data directory
        #[arg(long)]
        data: PathBuf,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Find the station nearest a Julian Date
    Station {
        /// Body name, e.g. Mars
        body: String,
        /// Julian Date (UT) to search around
        #[arg(long)]
        jd: f64,
        /// Ephemeris data directory
        #[arg(long)]
        data: PathBuf,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Find the next eclipse candidate
    NextEclipse {
        /// Julian Date (UT) to search from
        jd: f64,
        /// Kind: solar or lunar
        #[arg(long, default_value = "solar")]
        kind: String,
        /// Ephemeris data directory
        #[arg(long)]
        data: PathBuf,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn load_store(path: &PathBuf) -> EphemerisStore {
    match EphemerisStore::load(path) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Failed to load ephemeris data: {e}");
            process::exit(1);
        }
    }
}

fn parse_system(s: &str) -> HouseSystem {
    match s.to_ascii_lowercase().as_str() {
        "equal" => HouseSystem::Equal,
        "placidus" => HouseSystem::Placidus,
        "koch" => HouseSystem::Koch,
        "campanus" => HouseSystem::Campanus,
        "regiomontanus" => HouseSystem::Regiomontanus,
        "porphyry" => HouseSystem::Porphyry,
        "porphyry-neo" => HouseSystem::PorphyryNeo,
        "whole" => HouseSystem::Whole,
        "topocentric" => HouseSystem::Topocentric,
        "meridian" => HouseSystem::Meridian,
        "morinus" => HouseSystem::Morinus,
        "equal-mc" => HouseSystem::EqualFromMc,
        "alcabitius" => HouseSystem::Alcabitius,
        _ => {
            eprintln!("Invalid house system: {s}");
            eprintln!(
                "Valid: equal, placidus, koch, campanus, regiomontanus, porphyry, \
                 porphyry-neo, whole, topocentric, meridian, morinus, equal-mc, alcabitius"
            );
            process::exit(1);
        }
    }
}

fn parse_body(s: &str) -> Body {
    let lower = s.to_ascii_lowercase();
    for body in ALL_BODIES {
        if body.name().to_ascii_lowercase().replace(' ', "-") == lower {
            return body;
        }
    }
    eprintln!("Invalid body name: {s}");
    process::exit(1);
}

fn parse_phase(s: &str) -> LunarPhase {
    match s.to_ascii_lowercase().as_str() {
        "new" => LunarPhase::NewMoon,
        "first-quarter" => LunarPhase::FirstQuarter,
        "full" => LunarPhase::FullMoon,
        "last-quarter" => LunarPhase::LastQuarter,
        _ => {
            eprintln!("Invalid phase: {s} (new, first-quarter, full, last-quarter)");
            process::exit(1);
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Failed to serialize: {e}");
            process::exit(1);
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Chart {
            jd,
            lon,
            lat,
            system,
            data,
            json,
        } => {
            let store = load_store(&data);
            let system = parse_system(&system);
            let chart = compute_chart(&store, jd, lon, lat, CalcFlags::default(), system);
            if json {
                print_json(&chart);
                return;
            }
            println!("Chart at JD {jd} ({})", system.name());
            println!("Ascendant {:10.4}  MC {:10.4}", chart.ascendant_deg, chart.mc_deg);
            for body in ALL_BODIES {
                let p = chart.positions[body.index()];
                if p.valid {
                    println!(
                        "{:<12} {:10.4}  lat {:8.4}  speed {:8.4}",
                        body.name(),
                        p.longitude_deg,
                        p.latitude_deg,
                        p.speed_deg_per_day
                    );
                } else {
                    println!("{:<12} (no data)", body.name());
                }
            }
            for (i, cusp) in chart.cusps_deg.iter().enumerate() {
                println!("House {:<2} {:10.4}", i + 1, cusp);
            }
            if let Some(warning) = &chart.warning {
                eprintln!("Warning: {warning}");
            }
        }

        Commands::Houses {
            jd,
            lon,
            lat,
            system,
            json,
        } => {
            let system = parse_system(&system);
            let houses = compute_cusps(jd, lon.to_radians(), lat.to_radians(), system);
            if json {
                print_json(&houses);
                return;
            }
            println!("{} houses at JD {jd}", system.name());
            println!("Ascendant {:10.4}  MC {:10.4}", houses.asc_deg, houses.mc_deg);
            for (i, cusp) in houses.cusps_deg.iter().enumerate() {
                println!("House {:<2} {:10.4}", i + 1, cusp);
            }
            if !houses.converged {
                eprintln!("Warning: iteration did not converge");
            }
            if let Some(warning) = &houses.warning {
                eprintln!("Warning: {warning}");
            }
        }

        Commands::Aspect {
            lon1,
            lon2,
            orb,
            speed1,
            speed2,
            json,
        } => {
            let result = match (speed1, speed2) {
                (Some(s1), Some(s2)) => detect_aspect_with_speeds(lon1, s1, lon2, s2, orb),
                _ => detect_aspect(lon1, lon2, orb),
            };
            match result {
                Some(aspect) if json => print_json(&aspect),
                Some(aspect) => {
                    let motion = match aspect.applying {
                        Some(true) => ", applying",
                        Some(false) => ", separating",
                        None => "",
                    };
                    println!(
                        "{:?} ({}°), orb {:.4}°{motion}",
                        aspect.kind, aspect.exact_angle_deg, aspect.delta_deg
                    );
                }
                None => println!("No aspect within {orb}° orb"),
            }
        }

        Commands::NextPhase {
            jd,
            phase,
            data,
            json,
        } => {
            let store = load_store(&data);
            let phase = parse_phase(&phase);
            match find_next_lunar_phase(&store, jd, phase, &SearchConfig::default()) {
                Some(event) if json => print_json(&event),
                Some(event) => println!("{} at JD {:.6}", event.phase.name(), event.jd),
                None => println!("No {} found in the search window", phase.name()),
            }
        }

        Commands::Station {
            body,
            jd,
            data,
            json,
        } => {
            let store = load_store(&data);
            let body = parse_body(&body);
            match find_nearest_station(&store, body, jd, &SearchConfig::default()) {
                Some(event) if json => print_json(&event),
                Some(event) => {
                    println!("{} {:?} at JD {:.5}", event.body.name(), event.kind, event.jd)
                }
                None => println!("No station found near JD {jd}"),
            }
        }

        Commands::NextEclipse {
            jd,
            kind,
            data,
            json,
        } => {
            let store = load_store(&data);
            let result = match kind.to_ascii_lowercase().as_str() {
                "solar" => find_next_solar_eclipse(&store, jd, &SearchConfig::default()),
                "lunar" => find_next_lunar_eclipse(&store, jd, &SearchConfig::default()),
                _ => {
                    eprintln!("Invalid eclipse kind: {kind} (solar or lunar)");
                    process::exit(1);
                }
            };
            match result {
                Some(event) if json => print_json(&event),
                Some(event) => {
                    let kind_name = match event.kind {
                        EclipseKind::Solar => "Solar",
                        EclipseKind::Lunar => "Lunar",
                    };
                    let central = if event.central { " (central)" } else { "" };
                    println!(
                        "{kind_name} eclipse at JD {:.5}, moon latitude {:.3}°{central}",
                        event.jd, event.moon_latitude_deg
                    );
                }
                None => println!("No eclipse found in the search window"),
            }
        }
    }
}
