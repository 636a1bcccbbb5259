use actix_web::{web, HttpResponse, Responder};
use humantime::format_duration;
use serde::Serialize;
use std::time::Duration;
use sysinfo::System;

use crate::{
    constants::START_TIME,
    repositories::{announcement::AnnouncementRepository, teacher::TeacherRepository},
    AppState,
};

#[derive(Serialize)]
struct SystemInfo {
    os: String,
    kernel: String,
    hostname: String,
    cpu_count: usize,
    memory_total: String,
}

#[derive(Serialize)]
struct HealthCheckResponse {
    status: &'static str,
    uptime: String,
    timestamp: String,
    start_at: String,
    database: &'static str,
    version: &'static str,
    memory_usage: String,
    system: SystemInfo,
}

pub async fn health_check<A, T>(state: web::Data<AppState<A, T>>) -> impl Responder
where
    A: AnnouncementRepository + 'static,
    T: TeacherRepository + 'static,
{
    let now_utc = chrono::Utc::now();
    let uptime = now_utc.signed_duration_since(*START_TIME);
    let human_uptime = format_duration(Duration::from_secs(uptime.num_seconds().max(0) as u64));

    let database = match state.announcement_handler.announcement_repo.check_connection().await {
        Ok(_) => "OK",
        Err(e) => {
            tracing::warn!("Health check could not reach the database: {}", e);
            "Unavailable"
        }
    };

    let mut sys = System::new_all();
    sys.refresh_all();

    let memory_usage = sysinfo::get_current_pid()
        .ok()
        .and_then(|pid| sys.process(pid))
        .map_or("Unknown".to_string(), |p| {
            format!("{:.2} MB", p.memory() as f64 / 1024.0 / 1024.0)
        });

    let system = SystemInfo {
        os: System::name().unwrap_or_else(|| "Unknown".to_string()),
        kernel: System::kernel_version().unwrap_or_else(|| "Unknown".to_string()),
        hostname: System::host_name().unwrap_or_else(|| "Unknown".to_string()),
        cpu_count: sys.cpus().len(),
        memory_total: format!("{:.2} GB", sys.total_memory() as f64 / 1024.0 / 1024.0 / 1024.0),
    };

    HttpResponse::Ok().json(HealthCheckResponse {
        status: if database == "OK" { "healthy" } else { "degraded" },
        uptime: human_uptime.to_string(),
        timestamp: now_utc.to_rfc3339(),
        start_at: START_TIME.to_rfc3339(),
        database,
        version: env!("CARGO_PKG_VERSION"),
        memory_usage,
        system,
    })
}
