use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    rc::Rc,
    str::FromStr,
};

use clap::Parser;
use tracing::info;

use section_nav::{
    config::Config,
    course::{MultitopicFormat, SectionRef},
    links::CourseLinks,
    logging,
    navigation::SectionNavigation,
    render::TemplateRenderer,
};

#[derive(Parser, Debug)]
#[command(name = "Section Navigation")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Course directory holding config.toml and course.toml
    #[arg(default_value = ".")]
    path: String,
    /// Section number to render navigation for
    #[arg(short, long)]
    section: u32,
    /// Write the rendered widget here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
    #[arg(short, long)]
    local: bool,
}

pub struct Context {
    home: PathBuf,
    config: Config,
}

impl Context {
    pub fn new(home: PathBuf, local: bool) -> anyhow::Result<Self> {
        let config = Config::load(&home, local)?;

        Ok(Self { home, config })
    }

    fn absolute<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.home.join(path.as_ref())
    }
}

fn write_output(path: Option<&Path>, contents: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            path.parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(fs::create_dir_all)
                .transpose()?;

            fs::write(path, contents)?;
        }
        None => io::stdout().write_all(contents.as_bytes())?,
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    logging::init();

    let args = Args::parse();

    info!("running with {args:?}");

    let home = PathBuf::from_str(&args.path)?;
    let context = Context::new(home, args.local)?;

    let format = Rc::new(MultitopicFormat::load(&context.absolute("course.toml"))?);
    let renderer = TemplateRenderer::with_template_dir(
        &context.absolute("templates"),
        context.config.arrows.clone(),
    )?;
    let links = CourseLinks::new(context.config.base_url.clone());

    let mut navigation = SectionNavigation::new(format, SectionRef::Number(args.section))?;
    let contents = renderer.render(&mut navigation, &links)?;

    info!(
        "rendered navigation for section {} of {}",
        navigation.section_number(),
        context.config.title
    );

    write_output(args.output.as_deref(), &contents)?;

    Ok(())
}
