use actix_cors::Cors;
use actix_web::{dev::Server, get, post, web, App, HttpResponse, HttpServer, Responder};
use tracing::error;

use crate::application::{AgeReportUseCase, CsvLoadUseCase};
use crate::infrastructure::config::Settings;

pub struct HttpState {
    pub csv_load: CsvLoadUseCase,
    pub age_report: AgeReportUseCase,
    pub settings: Settings,
}

#[post("/people/load")]
async fn load_people(data: web::Data<HttpState>) -> impl Responder {
    match data
        .csv_load
        .execute(data.settings.csv_file.as_deref())
        .await
    {
        Ok(summary) => HttpResponse::Ok().json(summary),
        Err(e) => {
            error!(error = %e, "CSV load failed");
            HttpResponse::InternalServerError().body(e.to_string())
        }
    }
}

#[get("/people/age-distribution")]
async fn age_distribution(data: web::Data<HttpState>) -> impl Responder {
    match data.age_report.execute().await {
        Ok(shares) => HttpResponse::Ok().json(shares.unwrap_or_default()),
        Err(e) => {
            error!(error = %e, "Age report failed");
            HttpResponse::InternalServerError().body(e.to_string())
        }
    }
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().body("OK")
}

pub fn start_server(state: HttpState, host: &str, port: u16) -> std::io::Result<Server> {
    let state = web::Data::new(state);

    let server = HttpServer::new(move || {
        let cors = Cors::permissive(); // local tool; the API carries no auth

        App::new().wrap(cors).app_data(state.clone()).service(
            web::scope("/api")
                .service(load_people)
                .service(age_distribution)
                .service(health),
        )
    })
    .bind((host, port))?
    .run();

    Ok(server)
}
