use std::env;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use spdlog::{info, warn};

use concourse::catalog::Catalog;
use concourse::config::{read_config, Config};
use concourse::logger::configure_logger;
use concourse::text_utils::format_date_short;
use concourse::topic::Topic;

const CFG_FILE_NAME: &str = "concourse.toml";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config path
    #[arg(short, long)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List posts, optionally filtered by topic
    Posts {
        /// Topic label, e.g. "GPT-2 CUDA". Omit for all posts
        #[arg(short, long)]
        topic: Option<String>,

        /// Print records as JSON instead of board rows
        #[arg(long)]
        json: bool,
    },
    /// Show a single post, including its content
    Post {
        id: String,
    },
    /// List projects in catalog order
    Projects {
        /// Print records as JSON instead of board rows
        #[arg(long)]
        json: bool,
    },
    /// Show a single project
    Project {
        id: String,
    },
    /// List the known topic labels
    Topics,
}

fn get_config_path() -> Option<PathBuf> {
    let exe_path = env::current_exe().unwrap();
    let exe_dir = exe_path.parent().unwrap();
    let cur_dir = env::current_dir().unwrap();

    if exe_dir.join(CFG_FILE_NAME).exists() {
        return Some(exe_dir.join(CFG_FILE_NAME));
    }

    if cur_dir.join(CFG_FILE_NAME).exists() {
        return Some(cur_dir.join(CFG_FILE_NAME));
    }

    let cfg_dir = dirs::config_dir()?;
    if cfg_dir.join(CFG_FILE_NAME).exists() {
        return Some(cfg_dir.join(CFG_FILE_NAME));
    }

    None
}

fn open_config(cfg_path: Option<PathBuf>) -> Result<Option<Config>> {
    // Running without a config file is fine - the catalog is compiled in
    // and logging falls back to the console
    let Some(config_path) = cfg_path.or_else(get_config_path) else {
        return Ok(None);
    };

    let mut config = read_config(&config_path)?;

    if let Some(mut log) = config.log {
        let location = log.location.unwrap_or_else(|| {
            dirs::cache_dir().unwrap().join("Concourse").join("log").join("concourse.log")
        });
        log.location = Some(location);
        config.log = Some(log);
    }

    Ok(Some(config))
}

fn list_posts(catalog: &Catalog, topic: Topic, json: bool) -> Result<()> {
    let posts = catalog.posts_by_topic(topic);

    if json {
        println!("{}", serde_json::to_string_pretty(&posts)?);
        return Ok(());
    }

    if posts.is_empty() {
        println!("No posts under topic {}", topic);
        return Ok(());
    }

    for post in posts {
        let date = post.date_parsed().map_err(anyhow::Error::msg)?;
        let (month, day) = format_date_short(&date);
        println!("{} {:>2}  {:<8}  {:<16}  {} [{}]",
                 month, day, post.status.to_string(), post.topic.to_string(),
                 post.title, post.id);
    }
    Ok(())
}

fn show_post(catalog: &Catalog, id: &str) -> Result<()> {
    match catalog.post_by_id(id) {
        Some(post) => {
            println!("{}", post);
            println!("\n{}", post.content);
        }
        None => eprintln!("Post not found: {}", id),
    };
    Ok(())
}

fn list_projects(catalog: &Catalog, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(catalog.projects())?);
        return Ok(());
    }

    for project in catalog.projects() {
        println!("{:<20}  {:<22}  {} [{}]",
                 project.period, project.building_type.to_string(),
                 project.title, project.id);
    }
    Ok(())
}

fn show_project(catalog: &Catalog, id: &str) -> Result<()> {
    match catalog.project_by_id(id) {
        Some(project) => {
            println!("{}", project);
            println!("\nTechnologies: {}", project.technologies.join(", "));
            for paragraph in project.paragraphs() {
                println!("\n{}", paragraph);
            }
            for link in project.links.iter() {
                println!("\n{}: {}", link.label, link.url);
            }
            if let Some(ref note) = project.note {
                println!("\nNote: {}", note);
            }
        }
        None => eprintln!("Project not found: {}", id),
    };
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config_path = args.config_path.map(PathBuf::from);

    if let Some(config) = open_config(config_path)? {
        if let Err(err) = configure_logger(&config) {
            warn!("Error creating logger sinks. Using console instead. Desc={}", err);
        }
    }

    let catalog = Catalog::load()?;
    info!("Catalog loaded: {} posts, {} projects",
          catalog.posts().len(), catalog.projects().len());

    match args.command {
        Command::Posts { topic, json } => {
            let topic = match topic {
                None => Topic::All,
                Some(ref label) => match Topic::from_label(label) {
                    Some(topic) => topic,
                    None => bail!("Unknown topic {:?}. Known topics: {}", label,
                                  Topic::ALL.map(|t| t.label()).join(", ")),
                },
            };
            list_posts(&catalog, topic, json)
        }
        Command::Post { id } => show_post(&catalog, &id),
        Command::Projects { json } => list_projects(&catalog, json),
        Command::Project { id } => show_project(&catalog, &id),
        Command::Topics => {
            for topic in Topic::ALL {
                println!("{}", topic);
            }
            Ok(())
        }
    }
}
