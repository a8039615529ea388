//! Subcommand implementations.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use anyhow::{Context, bail};
use inkpost_client::form::resolve_category;
use inkpost_client::{ApiClient, ClientError, PostForm, debounce, views};
use inkpost_shared::dto::PostListQuery;
use uuid::Uuid;

use crate::args::{BrowseArgs, Cli, Commands, CreateArgs, EditArgs, ListArgs};

const LIST_FAILED: &str = "Error fetching posts. Please try again later.";
const POST_FAILED: &str = "Error fetching post. It might not exist or there was a server issue.";

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let client = ApiClient::new(&cli.server)?;

    match cli.command {
        Commands::List(args) => list(&client, args).await,
        Commands::Browse(args) => browse(client, args).await,
        Commands::Show { id } => show(&client, id).await,
        Commands::Create(args) => create(&client, args).await,
        Commands::Edit(args) => edit(&client, args).await,
        Commands::Delete { id, yes } => delete(&client, id, yes).await,
        Commands::Categories => categories(&client).await,
    }
}

/// Resolve a category given by name or id into the query-string form.
async fn category_filter(
    client: &ApiClient,
    category: Option<&str>,
) -> anyhow::Result<Option<String>> {
    let Some(value) = category else {
        return Ok(None);
    };
    let categories = client.list_categories().await?;
    Ok(resolve_category(value, &categories)?.map(|id| id.to_string()))
}

async fn list(client: &ApiClient, args: ListArgs) -> anyhow::Result<()> {
    let query = PostListQuery {
        search: args.search,
        category: category_filter(client, args.category.as_deref()).await?,
    };

    let posts = client.list_posts(&query).await.context(LIST_FAILED)?;
    print!("{}", views::render_post_list(&posts));
    Ok(())
}

async fn browse(client: ApiClient, args: BrowseArgs) -> anyhow::Result<()> {
    let category = category_filter(&client, args.category.as_deref()).await?;
    let (tx, mut queries) = debounce::channel(Duration::from_millis(args.debounce_ms));

    // Stdin is blocking; read it off the runtime.
    tokio::task::spawn_blocking(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    eprintln!("Type a search and press enter. Ctrl-D to quit.");
    while let Some(search) = queries.next().await {
        let query = PostListQuery {
            search: Some(search),
            category: category.clone(),
        };

        match client.list_posts(&query).await {
            Ok(posts) => print!("{}", views::render_post_list(&posts)),
            Err(e) => eprintln!("{LIST_FAILED} ({e})"),
        }
    }
    Ok(())
}

async fn show(client: &ApiClient, id: Uuid) -> anyhow::Result<()> {
    match client.get_post(id).await {
        Ok(post) => {
            print!("{}", views::render_post_detail(&post));
            Ok(())
        }
        Err(ClientError::NotFound) => bail!("Post not found."),
        Err(e) => Err(e).context(POST_FAILED),
    }
}

async fn create(client: &ApiClient, args: CreateArgs) -> anyhow::Result<()> {
    let mut form = PostForm {
        title: args.title,
        content: args.content,
        featured_image: args.featured_image.unwrap_or_default(),
        ..Default::default()
    };
    if let Some(category) = args.category.as_deref() {
        form.select_category(category, &client.list_categories().await?)?;
    }

    let post = client.create_post(&form.submit()?).await?;
    println!("Created post {}", post.id);
    print!("{}", views::render_post_detail(&post));
    Ok(())
}

async fn edit(client: &ApiClient, args: EditArgs) -> anyhow::Result<()> {
    let existing = match client.get_post(args.id).await {
        Ok(post) => post,
        Err(ClientError::NotFound) => bail!("Post not found."),
        Err(e) => return Err(e).context(POST_FAILED),
    };

    let mut form = PostForm::from_post(&existing);
    if let Some(title) = args.title {
        form.title = title;
    }
    if let Some(content) = args.content {
        form.content = content;
    }
    if let Some(image) = args.featured_image {
        form.featured_image = image;
    }
    if let Some(category) = args.category.as_deref() {
        form.select_category(category, &client.list_categories().await?)?;
    }

    let post = client.update_post(args.id, &form.submit()?).await?;
    println!("Updated post {}", post.id);
    print!("{}", views::render_post_detail(&post));
    Ok(())
}

async fn delete(client: &ApiClient, id: Uuid, yes: bool) -> anyhow::Result<()> {
    if !yes && !confirm(&format!("Delete post {id}?"))? {
        println!("Cancelled.");
        return Ok(());
    }

    match client.delete_post(id).await {
        Ok(()) => {
            println!("Deleted post {id}");
            Ok(())
        }
        Err(ClientError::NotFound) => bail!("Post not found."),
        Err(e) => Err(e.into()),
    }
}

async fn categories(client: &ApiClient) -> anyhow::Result<()> {
    let categories = client.list_categories().await?;
    print!("{}", views::render_categories(&categories));
    Ok(())
}

fn confirm(prompt: &str) -> anyhow::Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
