use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use nightsky_rs::{
    CardinalDirection, CatalogObject, CoordinateKind, DEFAULT_ARC_POINTS,
    DEFAULT_MIN_ELEVATION_DEG, ElongationSide, EventQuery, EventSearchConfig, GeoArc,
    MAJOR_GEO_SATELLITES, Observer, RiseTransitSet, TwilightEvent,
    format_dec, format_ra, generate_moon_svg, geostationary_arc, get_bortle_info,
    greatest_elongation, horizontal, is_nighttime, moon_info, next_planetary_event,
    next_station, parse_coordinate, parse_observer_location, parse_planet, parse_utc_date,
    planet_info, sqm_to_bortle, sun_info, tonight, visible_geo_satellites, visible_planets,
};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nightsky", about = "Night-sky ephemeris and visibility CLI")]
struct Cli {
    /// Observer latitude in degrees, north positive
    #[arg(long, global = true, allow_negative_numbers = true)]
    lat: Option<f64>,
    /// Observer longitude in degrees, east positive
    #[arg(long, global = true, allow_negative_numbers = true)]
    lon: Option<f64>,
    /// Observer as "lat, lon" or "40.7N 74.0W" (overrides --lat/--lon)
    #[arg(long, global = true)]
    location: Option<String>,
    /// UTC instant (RFC 3339, YYYY-MM-DDThh:mm:ss or YYYY-MM-DD); default now
    #[arg(long, global = true)]
    date: Option<String>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sun position, rise/set and twilight
    Sun,
    /// Moon phase, position and rise/set
    Moon {
        /// Print the phase silhouette as an SVG of this size instead
        #[arg(long)]
        svg: Option<f64>,
    },
    /// Alt/az of every planet
    Planets,
    /// Details for one planet
    Planet {
        /// Planet name (mercury .. neptune)
        name: String,
    },
    /// Next opposition or conjunction of a planet
    Event {
        name: String,
        #[arg(long, value_enum, default_value = "opposition")]
        kind: EventArg,
    },
    /// Next greatest elongation of Mercury or Venus
    Elongation {
        name: String,
        /// Restrict to the evening (east) or morning (west) sky
        #[arg(long, value_enum)]
        side: Option<SideArg>,
    },
    /// Next stationary point of a planet
    Station { name: String },
    /// Rank a JSON catalog of deep-sky objects for the observer
    Tonight {
        /// JSON array of {id, ra, dec, magnitude, ...} records
        catalog: PathBuf,
        /// Bortle class of the site (1-9)
        #[arg(long, default_value_t = 4)]
        bortle: u8,
        /// Only objects in this compass sector (N, NE, .. NW)
        #[arg(long)]
        direction: Option<CardinalDirection>,
        /// Maximum number of rows
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
    /// Alt/az and rise/transit/set of an RA/Dec
    AltAz {
        /// Right ascension: degrees or "05h 35m 17s"
        #[arg(allow_hyphen_values = true)]
        ra: String,
        /// Declination: degrees or "-05° 23' 28\""
        #[arg(allow_hyphen_values = true)]
        dec: String,
    },
    /// Geostationary satellites above the horizon
    Geo {
        /// Minimum elevation in degrees
        #[arg(long, default_value_t = DEFAULT_MIN_ELEVATION_DEG)]
        min_elevation: f64,
        /// Print the visible GEO arc instead
        #[arg(long)]
        arc: bool,
    },
    /// Bortle scale lookup by class or SQM reading
    Bortle {
        class: Option<u8>,
        /// Sky Quality Meter reading, mag/arcsec²
        #[arg(long, conflicts_with = "class")]
        sqm: Option<f64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum EventArg {
    Opposition,
    Conjunction,
}

impl From<EventArg> for EventQuery {
    fn from(arg: EventArg) -> Self {
        match arg {
            EventArg::Opposition => Self::Opposition,
            EventArg::Conjunction => Self::Conjunction,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum SideArg {
    East,
    West,
}

impl From<SideArg> for ElongationSide {
    fn from(arg: SideArg) -> Self {
        match arg {
            SideArg::East => Self::East,
            SideArg::West => Self::West,
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let date = instant(cli.date.as_deref())?;
    debug!(%date, "evaluating");

    match &cli.command {
        Commands::Sun => {
            let info = sun_info(&observer(&cli)?, &date);
            emit(cli.json, &info, || {
                println!("RA {}  Dec {}", format_ra(info.position.ra), format_dec(info.position.dec));
                println!(
                    "Alt {:.2}°  Az {:.2}°  distance {:.5} AU",
                    info.horizontal.altitude, info.horizontal.azimuth, info.position.distance_au
                );
                if info.rise_set.polar_day {
                    println!("Polar day");
                } else if info.rise_set.polar_night {
                    println!("Polar night");
                }
                println!("Solar noon          {}", fmt_time(Some(info.rise_set.transit)));
                for event in TwilightEvent::ALL {
                    println!("{:<19} {}", event.name(), fmt_time(info.twilight.get(event)));
                }
                if let Some(hours) = info.twilight.darkness_duration_hours {
                    println!("Astronomical darkness {hours:.1} h");
                }
            })
        }

        Commands::Moon { svg } => {
            let info = moon_info(&observer(&cli)?, &date);
            if let Some(size) = svg {
                println!("{}", generate_moon_svg(info.phase.phase, *size));
                return Ok(());
            }
            emit(cli.json, &info, || {
                let p = &info.phase;
                println!(
                    "{} {}  {:.1}% lit, age {:.1} d",
                    p.name.emoji(),
                    p.name,
                    p.illumination,
                    p.age_days
                );
                println!("Next new  {}", p.next_new.format("%Y-%m-%d %H:%M UTC"));
                println!("Next full {}", p.next_full.format("%Y-%m-%d %H:%M UTC"));
                println!(
                    "RA {}  Dec {}  distance {:.0} km",
                    format_ra(info.position.ra),
                    format_dec(info.position.dec),
                    info.position.distance_km
                );
                println!(
                    "Alt {:.2}°  Az {:.2}°",
                    info.horizontal.altitude, info.horizontal.azimuth
                );
                print_rise_transit_set(&info.rise_transit_set);
            })
        }

        Commands::Planets => {
            let planets = visible_planets(&observer(&cli)?, &date);
            emit(cli.json, &planets, || {
                println!("{:<8} {:>8} {:>8} {:>6}", "Planet", "Alt", "Az", "Elong");
                for p in &planets {
                    println!(
                        "{:<8} {:>7.2}° {:>7.2}° {:>5.1}° {}{}",
                        p.position.planet,
                        p.horizontal.altitude,
                        p.horizontal.azimuth,
                        p.position.elongation_deg,
                        if p.is_visible { "up" } else { "  " },
                        if p.is_retrograde { " R" } else { "" },
                    );
                }
            })
        }

        Commands::Planet { name } => {
            let planet = parse_planet(name)?;
            let info = planet_info(planet, &observer(&cli)?, &date)
                .with_context(|| format!("no position for {planet}"))?;
            emit(cli.json, &info, || {
                let p = &info.position;
                println!("{planet}{}", if info.is_retrograde { " (retrograde)" } else { "" });
                println!("RA {}  Dec {}", format_ra(p.ra), format_dec(p.dec));
                println!(
                    "Distance {:.4} AU  elongation {:.1}°  illuminated {:.1}%  diameter {:.1}\"",
                    p.distance_au, p.elongation_deg, p.illumination_pct, p.angular_diameter_arcsec
                );
                println!(
                    "Alt {:.2}°  Az {:.2}°",
                    info.horizontal.altitude, info.horizontal.azimuth
                );
                print_rise_transit_set(&info.rise_transit_set);
            })
        }

        Commands::Event { name, kind } => {
            let planet = parse_planet(name)?;
            let event = next_planetary_event(planet, &date, (*kind).into(), &EventSearchConfig::default())?;
            emit(cli.json, &event, || match &event {
                Some(e) => println!(
                    "{} {} on {} (elongation {:.1}°, distance {:.3} AU)",
                    e.planet,
                    e.kind,
                    e.date.format("%Y-%m-%d"),
                    e.elongation_deg,
                    e.distance_au
                ),
                None => println!("No such event for {planet} within the search span"),
            })
        }

        Commands::Elongation { name, side } => {
            let planet = parse_planet(name)?;
            let side = side.map(ElongationSide::from);
            let found = greatest_elongation(planet, &date, side, &EventSearchConfig::default())?;
            emit(cli.json, &found, || match &found {
                Some(e) => println!(
                    "{} greatest {} elongation on {}: {:.1}°",
                    e.planet,
                    e.side,
                    e.date.format("%Y-%m-%d"),
                    e.elongation_deg
                ),
                None => println!("No greatest elongation for {planet}"),
            })
        }

        Commands::Station { name } => {
            let planet = parse_planet(name)?;
            let station = next_station(planet, &date, &EventSearchConfig::default())?;
            emit(cli.json, &station, || match &station {
                Some(s) => println!(
                    "{} {} on {} at longitude {:.2}°",
                    s.planet,
                    s.station_type,
                    s.date.format("%Y-%m-%d %H:%M UTC"),
                    s.ecliptic_longitude
                ),
                None => println!("No station for {planet} within the search span"),
            })
        }

        Commands::Tonight {
            catalog,
            bortle,
            direction,
            limit,
        } => {
            let site = observer(&cli)?;
            let objects = load_catalog(catalog)?;
            let ranked: Vec<_> = tonight(&objects, &site, &date, *bortle)?
                .into_iter()
                .filter(|r| direction.is_none_or(|d| d.contains(r.current_azimuth)))
                .take(*limit)
                .collect();
            if !is_nighttime(&site, &date) {
                eprintln!("note: the Sun is up at the requested time");
            }
            emit(cli.json, &ranked, || {
                println!("{:<10} {:<24} {:>5} {:>8} {:>8} {:>5}", "ID", "Name", "Mag", "Alt", "Az", "Score");
                for r in &ranked {
                    println!(
                        "{:<10} {:<24} {:>5.1} {:>7.1}° {:>7.1}° {:>5}{}",
                        r.object.id,
                        r.object.name.as_deref().unwrap_or(""),
                        r.object.magnitude,
                        r.current_altitude,
                        r.current_azimuth,
                        r.visibility_score,
                        if r.is_optimal { " *" } else { "" },
                    );
                }
            })
        }

        Commands::AltAz { ra, dec } => {
            let site = observer(&cli)?;
            let ra_deg = parse_coordinate(ra, CoordinateKind::Ra)
                .with_context(|| format!("cannot parse RA {ra:?}"))?;
            let dec_deg = parse_coordinate(dec, CoordinateKind::Dec)
                .with_context(|| format!("cannot parse Dec {dec:?}"))?;
            let hz = horizontal(&site, ra_deg, dec_deg, &date);
            let object = CatalogObject::new("target", ra_deg, dec_deg, 0.0);
            let rts = nightsky_rs::object_rise_transit_set(&object, site.latitude, site.longitude, &date)?;

            #[derive(Serialize)]
            struct AltAzOutput {
                ra: f64,
                dec: f64,
                altitude: f64,
                azimuth: f64,
                rise_transit_set: RiseTransitSet,
            }
            let out = AltAzOutput {
                ra: ra_deg,
                dec: dec_deg,
                altitude: hz.altitude,
                azimuth: hz.azimuth,
                rise_transit_set: rts,
            };
            emit(cli.json, &out, || {
                println!("RA {}  Dec {}", format_ra(ra_deg), format_dec(dec_deg));
                println!(
                    "Alt {:.2}°  Az {:.2}° ({})",
                    hz.altitude,
                    hz.azimuth,
                    CardinalDirection::from_azimuth(hz.azimuth).label()
                );
                print_rise_transit_set(&rts);
            })
        }

        Commands::Geo { min_elevation, arc } => {
            let site = observer(&cli)?;
            if *arc {
                let arc = visible_arc(&site);
                return emit(cli.json, &arc, || {
                    for p in &arc.points {
                        println!(
                            "{:>7.1}°E  az {:>6.2}°  el {:>5.2}°",
                            p.longitude, p.azimuth, p.elevation
                        );
                    }
                    println!("Max elevation {:.2}°", arc.max_elevation);
                });
            }
            let sats =
                visible_geo_satellites(site.latitude, site.longitude, &MAJOR_GEO_SATELLITES, *min_elevation);
            emit(cli.json, &sats, || {
                for s in &sats {
                    println!(
                        "{:<14} {:>7.1}°E  az {:>6.2}°  el {:>5.2}°  {:>8.0} km",
                        s.satellite.name,
                        s.satellite.longitude,
                        s.look.azimuth,
                        s.look.elevation,
                        s.look.slant_range_km
                    );
                }
            })
        }

        Commands::Bortle { class, sqm } => {
            let class = match (class, sqm) {
                (Some(c), _) => *c,
                (None, Some(s)) => sqm_to_bortle(*s),
                (None, None) => bail!("give a Bortle class or --sqm"),
            };
            let info = get_bortle_info(class).with_context(|| format!("Bortle class {class} out of range 1-9"))?;
            emit(cli.json, info, || {
                println!(
                    "Class {}: {} (limiting magnitude {:.1}, SQM {:.2})",
                    info.class, info.name, info.limiting_magnitude, info.sqm
                );
            })
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn observer(cli: &Cli) -> anyhow::Result<Observer> {
    if let Some(s) = &cli.location {
        return Ok(parse_observer_location(s)?);
    }
    match (cli.lat, cli.lon) {
        (Some(lat), Some(lon)) => {
            if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
                bail!("latitude {lat} or longitude {lon} out of range");
            }
            Ok(Observer::new(lat, lon))
        }
        _ => bail!("observer required: pass --lat and --lon, or --location"),
    }
}

fn instant(date: Option<&str>) -> anyhow::Result<DateTime<Utc>> {
    match date {
        Some(s) => Ok(parse_utc_date(s)?),
        None => Ok(Utc::now()),
    }
}

fn load_catalog(path: &Path) -> anyhow::Result<Vec<CatalogObject>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading catalog {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing catalog {}", path.display()))
}

/// Print `value` as pretty JSON, or run `text` for the human-readable form.
fn emit<T: Serialize + ?Sized>(json: bool, value: &T, text: impl FnOnce()) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        text();
    }
    Ok(())
}

fn fmt_time(t: Option<DateTime<Utc>>) -> String {
    t.map_or_else(|| "--:--".to_string(), |t| t.format("%Y-%m-%d %H:%M UTC").to_string())
}

/// Visible GEO arc sampled at the default resolution.
fn visible_arc(site: &Observer) -> GeoArc {
    geostationary_arc(site.latitude, site.longitude, DEFAULT_ARC_POINTS)
}

fn print_rise_transit_set(rts: &RiseTransitSet) {
    match rts {
        RiseTransitSet::NeverRises => println!("Never rises"),
        RiseTransitSet::Circumpolar { transit } => {
            println!("Circumpolar, transit {}", fmt_time(Some(*transit)));
        }
        RiseTransitSet::Normal { rise, transit, set } => {
            println!("Rise    {}", fmt_time(Some(*rise)));
            println!("Transit {}", fmt_time(Some(*transit)));
            println!("Set     {}", fmt_time(Some(*set)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("nightsky").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn negative_coordinates_parse() {
        let c = cli(&["sun", "--lat", "-33.9", "--lon", "-70.6"]);
        let o = observer(&c).unwrap();
        assert_eq!((o.latitude, o.longitude), (-33.9, -70.6));
    }

    #[test]
    fn location_string_wins() {
        let c = cli(&["--location", "40.7N 74.0W", "moon"]);
        let o = observer(&c).unwrap();
        assert_eq!((o.latitude, o.longitude), (40.7, -74.0));
    }

    #[test]
    fn observer_is_required() {
        assert!(observer(&cli(&["planets"])).is_err());
        assert!(observer(&cli(&["planets", "--lat", "95", "--lon", "0"])).is_err());
    }

    #[test]
    fn subcommand_arguments() {
        let c = cli(&["tonight", "m.json", "--bortle", "6", "--direction", "SW"]);
        match c.command {
            Commands::Tonight { bortle, direction, limit, .. } => {
                assert_eq!(bortle, 6);
                assert_eq!(direction, Some(CardinalDirection::SW));
                assert_eq!(limit, 20);
            }
            _ => panic!("wrong subcommand"),
        }
        let c = cli(&["alt-az", "05h 35m 17s", "-05 23 28"]);
        assert!(matches!(c.command, Commands::AltAz { .. }));
    }

    #[test]
    fn geo_defaults() {
        match cli(&["geo", "--lat", "51.5", "--lon", "-0.1"]).command {
            Commands::Geo { min_elevation, arc } => {
                assert_eq!(min_elevation, DEFAULT_MIN_ELEVATION_DEG);
                assert!(!arc);
            }
            _ => panic!("wrong subcommand"),
        }

        let arc = visible_arc(&Observer::new(51.5, -0.1));
        assert!(!arc.points.is_empty());
        for pair in arc.points.windows(2) {
            let step = pair[1].longitude - pair[0].longitude;
            assert!((step - 360.0 / DEFAULT_ARC_POINTS as f64).abs() < 1e-9, "step {step}");
        }
    }

    #[test]
    fn dates() {
        assert!(instant(Some("2024-01-01")).is_ok());
        assert!(instant(Some("yesterday")).is_err());
    }
}
