use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use blog_service::handlers;
use blog_service::jobs::HeartbeatJob;
use blog_service::middleware::PageViewCounter;
use blog_service::queue::TaskQueue;
use blog_service::{db, AppError, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Blog Service
///
/// A small blog backend exposing the post listing, post detail with
/// comments, tag/user filtered listings, a JSON user API, and unpaginated
/// admin listings. A recurring job demonstrates fire-and-forget dispatch to
/// the external worker queue.
///
/// # Routes
///
/// - `/` - redirect to the blog home
/// - `/blog/*` - listing, post detail, comment submission, filters, users
/// - `/admin/*` - debug listings of every entity
/// - `/health` - liveness summary
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {}", e);
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting blog-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    // Initialize database connection pool and bring the schema up to date
    let pool = db::create_pool(&config.database.url, config.database.max_connections).await?;
    db::run_migrations(&pool).await?;
    tracing::info!("Connected to database, migrations applied");

    // Connect to the task broker
    let redis_client = redis::Client::open(config.queue.url.as_str())?;
    let redis_manager = redis_client.get_connection_manager().await?;
    let task_queue = TaskQueue::new(redis_manager, config.queue.task_queue.clone());
    tracing::info!("Connected to task broker at {}", config.queue.url);

    // Recurring demonstration dispatch, independent of the HTTP surface
    HeartbeatJob::new(task_queue).spawn();

    let bind_address = format!("{}:{}", config.app.host, config.app.port);
    tracing::info!("Starting HTTP server at {}", bind_address);

    let app_config = config.clone();
    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        // Malformed JSON bodies (including unknown fields on closed
        // schemas) surface as a structured 400 instead of the default
        // plain-text error.
        let json_config = web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into());

        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(app_config.clone()))
            .app_data(json_config)
            .wrap(PageViewCounter::new(app_config.app.secret_key.clone()))
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            .route("/", web::get().to(handlers::index))
            .route("/health", web::get().to(handlers::health))
            .service(
                web::scope("/blog")
                    .route("", web::get().to(handlers::posts::home))
                    .route("/", web::get().to(handlers::posts::home))
                    .service(
                        web::resource("/users")
                            .route(web::get().to(handlers::users::list_users))
                            .route(web::post().to(handlers::users::add_user)),
                    )
                    .service(
                        web::resource("/post/{post_id}")
                            .route(web::get().to(handlers::posts::get_post))
                            .route(web::post().to(handlers::comments::create_comment)),
                    )
                    .route(
                        "/posts_by_tag/{tag_name}",
                        web::get().to(handlers::posts::posts_by_tag),
                    )
                    .route(
                        "/posts_by_user/{username}",
                        web::get().to(handlers::posts::posts_by_user),
                    )
                    // Registered last so it cannot shadow the named routes.
                    .route("/{page}", web::get().to(handlers::posts::home_page)),
            )
            .service(
                web::scope("/admin")
                    .route("/posts", web::get().to(handlers::admin::list_posts))
                    .route("/users", web::get().to(handlers::admin::list_users))
                    .route("/comments", web::get().to(handlers::admin::list_comments))
                    .route("/tags", web::get().to(handlers::admin::list_tags))
                    .route("/reminders", web::get().to(handlers::admin::list_reminders)),
            )
            .default_service(web::route().to(handlers::not_found))
    })
    .bind(&bind_address)?
    .run()
    .await?;

    Ok(())
}
