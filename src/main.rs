use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};

use meshmask::contour::ContourConfig;
use meshmask::edge::SobelEdgeDetector;
use meshmask::logging::init_logger;
use meshmask::math::{Rect, UvRect, Vec2};
use meshmask::{
    AuthoringConfig, Color, GeometryError, MaskShape, MeshParams, RasterImage,
    TriangulatorDispatcher, TriangulatorType,
};

#[derive(Parser, Debug)]
#[command(name = "meshmask")]
#[command(about = "Author and inspect polygon masks for sprites")]
struct Cli {
    /// Log pipeline stages and timings to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,
    /// Triangulation algorithm (`ear-clip` or `earcut`).
    #[arg(long, global = true, default_value_t = TriangulatorType::EarClip)]
    triangulator: TriangulatorType,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Trace a mask from an image's alpha silhouette.
    #[command(name = "trace")]
    Trace(TraceArgs),
    /// Build a mask from a JSON list of points.
    #[command(name = "path")]
    Path(PathArgs),
    /// Clip a mask to a rectangle laid out around a pivot.
    #[command(name = "clip")]
    Clip(ClipArgs),
    /// Test whether a local point hits a mask.
    #[command(name = "hit")]
    Hit(HitArgs),
    /// Build the vertex streams for drawing a mask.
    #[command(name = "mesh")]
    Mesh(MeshArgs),
}

#[derive(Args, Debug, Clone)]
struct OutputArgs {
    /// Write JSON here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
struct TargetArgs {
    #[arg(long)]
    width: f32,
    #[arg(long)]
    height: f32,
    #[arg(long, default_value_t = 0.5)]
    pivot_x: f32,
    #[arg(long, default_value_t = 0.5)]
    pivot_y: f32,
}

impl TargetArgs {
    fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    fn pivot(&self) -> Vec2 {
        Vec2::new(self.pivot_x, self.pivot_y)
    }
}

#[derive(Args, Debug, Clone)]
struct TraceArgs {
    #[arg(long, required = true)]
    input: PathBuf,
    #[arg(long, default_value_t = 0.9)]
    alpha_threshold: f32,
    #[arg(long, default_value_t = 0.01)]
    gradient_threshold: f32,
    #[arg(long, default_value_t = 256.0)]
    max_search_radius_sq: f32,
    /// Scale the outline from pixels to this width (requires --height).
    #[arg(long, requires = "height")]
    width: Option<f32>,
    #[arg(long, requires = "width")]
    height: Option<f32>,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug, Clone)]
struct PathArgs {
    /// JSON array of `{"x": .., "y": ..}` points.
    #[arg(long, required = true)]
    input: PathBuf,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug, Clone)]
struct ClipArgs {
    #[arg(long, required = true)]
    shape: PathBuf,
    #[command(flatten)]
    target: TargetArgs,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug, Clone)]
struct HitArgs {
    #[arg(long, required = true)]
    shape: PathBuf,
    #[arg(long, allow_hyphen_values = true)]
    x: f32,
    #[arg(long, allow_hyphen_values = true)]
    y: f32,
}

#[derive(Args, Debug, Clone)]
struct MeshArgs {
    #[arg(long, required = true)]
    shape: PathBuf,
    #[command(flatten)]
    target: TargetArgs,
    /// Sprite region of its texture as `x,y,width,height` in [0, 1].
    #[arg(long, value_delimiter = ',', default_values_t = [0.0, 0.0, 1.0, 1.0])]
    uv: Vec<f32>,
    /// Vertex tint as `r,g,b,a` in [0, 1].
    #[arg(long, value_delimiter = ',', default_values_t = [1.0, 1.0, 1.0, 1.0])]
    color: Vec<f32>,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Serialize, Debug)]
struct HitReport {
    point: Vec2,
    inside: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    });

    let triangulator = TriangulatorDispatcher::new(cli.triangulator);
    log::debug!("using {} triangulation", triangulator.active_type());

    match cli.cmd {
        Command::Trace(args) => run_trace(args, &triangulator),
        Command::Path(args) => run_path(args, &triangulator),
        Command::Clip(args) => run_clip(args, &triangulator),
        Command::Hit(args) => run_hit(args),
        Command::Mesh(args) => run_mesh(args),
    }
}

fn run_trace(args: TraceArgs, triangulator: &TriangulatorDispatcher) -> Result<()> {
    let image = RasterImage::from_file(&args.input)
        .with_context(|| format!("loading image {}", args.input.display()))?;

    let config = AuthoringConfig {
        edge: SobelEdgeDetector::new(args.alpha_threshold, args.gradient_threshold),
        contour: ContourConfig {
            max_search_radius_sq: args.max_search_radius_sq,
        },
        target_size: args.width.zip(args.height).map(|(w, h)| Vec2::new(w, h)),
    };
    let shape = MaskShape::from_image(&image, &config, triangulator)
        .with_context(|| format!("tracing {}", args.input.display()))?;
    log::info!(
        "traced {} vertices, {} triangles",
        shape.vertices.len(),
        shape.triangles.len()
    );

    write_json(args.output.out.as_deref(), &shape)
}

fn run_path(args: PathArgs, triangulator: &TriangulatorDispatcher) -> Result<()> {
    let points: Vec<Vec2> = read_json(&args.input)?;
    let shape = MaskShape::from_path(points, triangulator)
        .with_context(|| format!("building mask from {}", args.input.display()))?;
    write_json(args.output.out.as_deref(), &shape)
}

fn run_clip(args: ClipArgs, triangulator: &TriangulatorDispatcher) -> Result<()> {
    let shape: MaskShape = read_json(&args.shape)?;
    let rect = Rect::from_size_and_pivot(args.target.size(), args.target.pivot());

    let clipped = match shape.clipped_to_rect(&rect, triangulator) {
        Ok(clipped) => clipped,
        Err(GeometryError::NoIntersection) => {
            log::warn!("mask does not overlap the target rect; keeping it unclipped");
            shape
        }
        Err(err) => return Err(err).context("clipping mask"),
    };
    write_json(args.output.out.as_deref(), &clipped)
}

fn run_hit(args: HitArgs) -> Result<()> {
    let shape: MaskShape = read_json(&args.shape)?;
    let point = Vec2::new(args.x, args.y);
    let report = HitReport {
        point,
        inside: shape.contains(point),
    };
    write_json(None, &report)
}

fn run_mesh(args: MeshArgs) -> Result<()> {
    ensure!(args.uv.len() == 4, "--uv takes 4 values, got {}", args.uv.len());
    ensure!(args.color.len() == 4, "--color takes 4 values, got {}", args.color.len());

    let shape: MaskShape = read_json(&args.shape)?;
    let params = MeshParams {
        uv: UvRect::from_xywh(args.uv[0], args.uv[1], args.uv[2], args.uv[3]),
        pivot: args.target.pivot(),
        target_size: args.target.size(),
        color: Color::new(args.color[0], args.color[1], args.color[2], args.color[3]),
    };
    let mesh = shape.build_mesh(&params);
    log::debug!(
        "mesh: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    write_json(args.output.out.as_deref(), &mesh)
}

fn write_json(path: Option<&Path>, value: &impl Serialize) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(value).context("serializing json")?;
    match path {
        Some(path) => {
            fs::write(path, bytes).with_context(|| format!("writing json {}", path.display()))
        }
        None => {
            println!("{}", String::from_utf8_lossy(&bytes));
            Ok(())
        }
    }
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&data).with_context(|| format!("parsing json {}", path.display()))
}
