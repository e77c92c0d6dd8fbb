use geo::{Coord, Geometry, LineString, MultiLineString};
use geodesic_shapes::{
    dump_geometry_to_geojson, geodesic_point_buffer, graticules, great_circle, great_circle_through, parse_extent,
    projection_extent_outline, size_of_degree_at, tissot_indicatrix, units::MI, DegreeSize, EngineConfig, Extent,
    ProjTransform, ProjectionSpec, Result,
};
use std::path::Path;
use tracing_subscriber::EnvFilter;

const LEITH: Coord = Coord { x: -3.17011665725, y: 55.9764025681 };
const EDINBURGH: Coord = Coord { x: -3.18904598892, y: 55.9532968753 };
const RAPA_NUI: Coord = Coord { x: -109.28894, y: -27.12201 };
const KHEOPS: Coord = Coord { x: 31.13074, y: 29.97594 };

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => EngineConfig::load(Path::new(&path))?,
        None => EngineConfig::default(),
    };
    let solver = config.solver();

    println!("geodesic-shapes demos\n");
    println!("Ellipsoid: {}", config.ellipsoid);
    println!("Output:    {}", config.output_dir.display());

    println!("\n1. I'm gonna be (500 miles), from Leith:");
    let five_hundred: LineString = geodesic_point_buffer(&solver, LEITH, config.buffer_segments, 500.0 * MI)?;
    let five_hundred_more: LineString = geodesic_point_buffer(&solver, LEITH, config.buffer_segments, 1000.0 * MI)?;
    let just_to_be = MultiLineString::new(vec![five_hundred, five_hundred_more]);
    save(&config, "proclaimers.geojson", just_to_be.into());

    println!("\n2. Edinburgh to the Great Pyramid:");
    let flight: LineString = great_circle(&solver, EDINBURGH, KHEOPS, config.great_circle_segments)?;
    println!("   {} vertices", flight.0.len());
    save(&config, "edinburgh_giza.geojson", flight.into());

    println!("\n3. Great circle through Rapa Nui and the Great Pyramid:");
    let sweep = great_circle_through(&solver, RAPA_NUI, KHEOPS, &config.sweep)?;
    println!("   {} points", sweep.0.len());
    save(&config, "ancient_sites.geojson", sweep.into());

    println!("\n4. Projected map extents:");
    let footprints: Vec<(&str, &str, Extent)> = vec![
        (
            "mollweide_indian_ocean",
            "+proj=moll +lon_0=0 +x_0=0 +y_0=0 +datum=WGS84 +units=m +no_defs",
            Extent::new(5456328.0, -2786634.0, 14254990.0, 2320744.0),
        ),
        (
            "aeqd_edinburgh",
            "+proj=aeqd +lat_0=55.9533507888 +lon_0=-3.18890398422 +units=m",
            Extent::new(-6262958.0, -6367407.0, 9598379.0, 2839657.0),
        ),
        (
            "osgb_europe",
            "EPSG:27700",
            parse_extent("-1828313, -1196252 : 2280177, 2121200")?,
        ),
    ];

    for (name, definition, extent) in footprints {
        println!("\n   {}:", name);
        let transform = match ProjectionSpec::new(definition).and_then(|spec| ProjTransform::new(&spec)) {
            Ok(transform) => transform,
            Err(e) => {
                println!("     Error: {}", e);
                continue;
            }
        };

        let outline = projection_extent_outline(&transform, &extent, config.densify_segments);
        println!("     kept {} points, dropped {}", outline.coords.len(), outline.dropped.len());
        save(&config, &format!("{}.geojson", name), config.outline_shape.build(outline.coords));
    }

    println!("\n5. Tissot indicatrix and graticule:");
    match tissot_indicatrix(&solver, &config.tissot) {
        Ok(tissot) => {
            println!("   {} circles", tissot.0.len());
            save(&config, "tissot.geojson", tissot.into());
        }
        Err(e) => println!("   Error: {}", e),
    }
    match graticules(&config.graticule) {
        Ok(grid) => {
            println!("   {} graticule lines", grid.0.len());
            save(&config, "graticule.geojson", grid.into());
        }
        Err(e) => println!("   Error: {}", e),
    }

    println!("\n6. Size of a degree:");
    for latitude in [0.0, 30.0, 60.0, 80.0, 89.5, 90.0] {
        match size_of_degree_at(&solver, latitude)? {
            Some(DegreeSize {
                longitude_m,
                latitude_m: Some(latitude_m),
            }) => println!(
                "   {:>5.1}°: longitude {:>10.3} m, latitude {:>10.3} m",
                latitude, longitude_m, latitude_m
            ),
            Some(DegreeSize { longitude_m, latitude_m: None }) => println!(
                "   {:>5.1}°: longitude {:>10.3} m, latitude undefined",
                latitude, longitude_m
            ),
            None => println!("   {:>5.1}°: undefined", latitude),
        }
    }

    Ok(())
}

fn save(config: &EngineConfig, file_name: &str, geometry: Geometry) {
    let path = config.output_dir.join(file_name);
    match dump_geometry_to_geojson(geometry, &path) {
        Ok(()) => println!("   Wrote {}", path.display()),
        Err(e) => println!("   Error writing {}: {}", path.display(), e),
    }
}
