use std::path::Path;
use std::sync::Arc;

use tracing::info;

use headcount::application::{AgeReportUseCase, CsvLoadUseCase};
use headcount::infrastructure::config::Settings;
use headcount::infrastructure::db::connection::init_people_db;
use headcount::infrastructure::db::{PeopleRepository, PersonStore};
use headcount::infrastructure::storage::{FileSource, LocalFiles};
use headcount::interfaces::http::{start_server, HttpState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();

    let settings = Settings::load().expect("Failed to load settings");

    let db_path = Path::new(&settings.database_path);
    init_people_db(db_path)
        .await
        .expect("Failed to initialize people database");

    let repository = PeopleRepository::connect(db_path)
        .await
        .expect("Failed to connect people database");

    let store: Arc<dyn PersonStore> = Arc::new(repository);
    let files: Arc<dyn FileSource> = Arc::new(LocalFiles);

    let state = HttpState {
        csv_load: CsvLoadUseCase::new(files, store.clone()),
        age_report: AgeReportUseCase::new(store),
        settings: settings.clone(),
    };

    info!(
        host = %settings.http_host,
        port = settings.http_port,
        "Backend initialized, starting HTTP server"
    );

    start_server(state, &settings.http_host, settings.http_port)?.await
}
