use std::path::PathBuf;

use articles::config::{ClientConfig, ConfigError, StubConfig};
use articles::net::api::HttpApi;
use articles::net::types::{ApiError, Article, ArticleDraft, ArticleId, Credentials, Topic};
use articles::state::route::Route;
use articles::storage::FileStorage;
use articles::{App, AppError, stub};
use clap::{Args, Parser, Subcommand};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("{0}")]
    App(#[from] AppError),
    #[error("article {0} is not in the current list")]
    UnknownArticle(ArticleId),
    #[error("an article needs a non-blank title, text and topic")]
    IncompleteDraft,
    #[error("stub server failed: {0}")]
    Serve(#[from] std::io::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

type CliApp = App<HttpApi, FileStorage>;

#[derive(Parser, Debug)]
#[command(name = "articles", about = "Articles API client")]
struct Cli {
    /// Overrides `ARTICLES_BASE_URL`.
    #[arg(long)]
    base_url: Option<String>,

    /// Overrides `ARTICLES_STORAGE_PATH`.
    #[arg(long)]
    storage: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and store the session token.
    Login {
        #[arg(long)]
        username: String,
        #[arg(long, env = "ARTICLES_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored session token.
    Logout,
    Articles(ArticlesCommand),
    /// Run the local stub API.
    Serve {
        #[arg(long)]
        port: Option<u16>,
    },
}

#[derive(Args, Debug)]
struct ArticlesCommand {
    #[command(subcommand)]
    command: ArticlesSubcommand,
}

#[derive(Subcommand, Debug)]
enum ArticlesSubcommand {
    List,
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        text: String,
        #[arg(long)]
        topic: Topic,
    },
    /// Edit an article; omitted fields keep their current values.
    Update {
        id: ArticleId,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        text: Option<String>,
        #[arg(long)]
        topic: Option<Topic>,
    },
    Delete {
        id: ArticleId,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Serve { port } => run_serve(port).await,
        Command::Login { username, password } => {
            let mut app = build_app(cli.base_url.as_deref(), cli.storage)?;
            app.login(&Credentials::new(username, password)).await?;
            print_message(&app);
            Ok(())
        }
        Command::Logout => {
            let mut app = build_app(cli.base_url.as_deref(), cli.storage)?;
            if app.logout()? {
                print_message(&app);
            } else {
                eprintln!("not logged in");
            }
            Ok(())
        }
        Command::Articles(articles) => {
            let mut app = build_app(cli.base_url.as_deref(), cli.storage)?;
            run_articles(&mut app, articles).await
        }
    }
}

fn build_app(base_url: Option<&str>, storage: Option<PathBuf>) -> Result<CliApp, CliError> {
    let mut config = ClientConfig::from_env()?;
    if let Some(base_url) = base_url {
        config = config.with_base_url(base_url)?;
    }
    if let Some(storage) = storage {
        config.storage_path = storage;
    }
    tracing::debug!(base_url = %config.base_url, storage = %config.storage_path.display(), "client configured");

    let api = HttpApi::new(&config)?;
    Ok(App::new(api, FileStorage::new(config.storage_path)))
}

async fn run_serve(port: Option<u16>) -> Result<(), CliError> {
    let mut config = StubConfig::from_env()?;
    if let Some(port) = port {
        config.port = port;
    }
    stub::serve(config).await?;
    Ok(())
}

async fn run_articles(app: &mut CliApp, articles: ArticlesCommand) -> Result<(), CliError> {
    app.navigate(Route::Articles);
    match articles.command {
        ArticlesSubcommand::List => {
            app.list().await?;
            print_message(app);
            let articles = app.articles();
            print_json(articles.as_slice())
        }
        ArticlesSubcommand::Create { title, text, topic } => {
            let draft = ArticleDraft::new(title, text, topic);
            if !draft.is_submittable() {
                return Err(CliError::IncompleteDraft);
            }
            app.create(&draft).await?;
            print_message(app);
            let articles = app.articles();
            print_json(&articles.as_slice().last())
        }
        ArticlesSubcommand::Update { id, title, text, topic } => {
            app.list().await?;
            app.select_article(Some(id));
            let current = app.current_article().ok_or(CliError::UnknownArticle(id))?;
            let draft = apply_edits(&current, title, text, topic);
            if !draft.is_submittable() {
                return Err(CliError::IncompleteDraft);
            }
            app.update(id, &draft).await?;
            print_message(app);
            let articles = app.articles();
            print_json(&articles.get(id))
        }
        ArticlesSubcommand::Delete { id } => {
            app.delete(id).await?;
            print_message(app);
            let articles = app.articles();
            print_json(articles.as_slice())
        }
    }
}

fn apply_edits(current: &Article, title: Option<String>, text: Option<String>, topic: Option<Topic>) -> ArticleDraft {
    let mut draft = ArticleDraft::from(current);
    if let Some(title) = title {
        draft.title = title;
    }
    if let Some(text) = text {
        draft.text = text;
    }
    if let Some(topic) = topic {
        draft.topic = topic.as_str().to_owned();
    }
    draft
}

fn print_message(app: &CliApp) {
    let status = app.status();
    if !status.message.is_empty() {
        println!("{}", status.message);
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
