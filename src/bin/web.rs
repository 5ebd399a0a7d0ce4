//! Single binary web server: JSON API over the bracket engine, many tournaments in memory.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default; see `config.rs` for the environment overrides.

use actix_web::{
    get, post, put,
    web::{Bytes, Data, Json, Path, Query},
    App, HttpResponse, HttpServer, Responder,
};
use billiards_bracket::config::ServerConfig;
use billiards_bracket::{
    can_start_semi_final, create_tournament, get_tournament_results, players_from_csv,
    report_score, seed_players, simulate_and_report, tournament_phase, BracketError, MatchStatus,
    Player, Score, Tournament, TournamentId, TournamentPhase,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Instant;
use tokio::sync::RwLock;

/// Per-tournament entry: tournament data + last activity time (for auto-cleanup).
struct TournamentEntry {
    tournament: Tournament,
    last_activity: Instant,
}

/// In-memory state: many tournaments by ID. The write lock serializes every score update.
type AppState = Data<RwLock<HashMap<TournamentId, TournamentEntry>>>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Tournament plus derived progress, as returned by every tournament endpoint.
#[derive(Serialize)]
struct TournamentView<'a> {
    #[serde(flatten)]
    tournament: &'a Tournament,
    phase: TournamentPhase,
    can_start_semi_final: bool,
}

impl<'a> TournamentView<'a> {
    fn of(tournament: &'a Tournament) -> Self {
        Self {
            tournament,
            phase: tournament_phase(tournament),
            can_start_semi_final: can_start_semi_final(&tournament.winners, &tournament.losers),
        }
    }
}

#[derive(Deserialize)]
struct PlayerBody {
    #[serde(default)]
    id: Option<String>,
    name: String,
    #[serde(default)]
    rank: Option<String>,
    #[serde(default)]
    avatar: Option<String>,
}

#[derive(Deserialize)]
struct CreateTournamentBody {
    #[serde(default = "default_name")]
    name: String,
    players: Vec<PlayerBody>,
    /// Random seeding instead of list order.
    #[serde(default)]
    shuffle: bool,
}

#[derive(Deserialize)]
struct ImportQuery {
    #[serde(default = "default_name")]
    name: String,
    #[serde(default)]
    shuffle: bool,
}

#[derive(Deserialize)]
struct ScoreBody {
    player1: u32,
    player2: u32,
    #[serde(default = "default_status")]
    status: MatchStatus,
}

fn default_name() -> String {
    "Club tournament".to_string()
}

fn default_status() -> MatchStatus {
    MatchStatus::Completed
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

/// Path segments: tournament id and match id (e.g. /api/tournaments/{id}/matches/{match_id})
#[derive(Deserialize)]
struct TournamentMatchPath {
    id: TournamentId,
    match_id: String,
}

fn bad_request(e: BracketError) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

fn no_tournament() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" }))
}

fn to_player(body: PlayerBody) -> Result<Player, BracketError> {
    let player = match body.id.filter(|id| !id.trim().is_empty()) {
        Some(id) => Player::new(id, body.name)?,
        None => Player::named(body.name)?,
    };
    let player = match body.rank {
        Some(rank) => player.with_rank(rank),
        None => player,
    };
    Ok(match body.avatar {
        Some(avatar) => player.with_avatar(avatar),
        None => player,
    })
}

/// Seed, generate and store a new tournament.
async fn insert_tournament(
    state: &AppState,
    name: String,
    mut players: Vec<Player>,
    shuffle: bool,
) -> HttpResponse {
    if shuffle {
        seed_players(&mut players, &mut rand::thread_rng());
    }
    let tournament = match create_tournament(name, players) {
        Ok(t) => t,
        Err(e) => return bad_request(e),
    };
    let response = HttpResponse::Ok().json(TournamentView::of(&tournament));
    state.write().await.insert(
        tournament.id,
        TournamentEntry {
            tournament,
            last_activity: Instant::now(),
        },
    );
    response
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "billiards-bracket",
    })
}

/// Create a tournament from a JSON player list (power of two, at least 8).
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, body: Json<CreateTournamentBody>) -> HttpResponse {
    let body = body.into_inner();
    let players: Result<Vec<Player>, BracketError> = body.players.into_iter().map(to_player).collect();
    match players {
        Ok(players) => insert_tournament(&state, body.name, players, body.shuffle).await,
        Err(e) => bad_request(e),
    }
}

/// Create a tournament from a CSV body (`id,name,rank,avatar` header).
#[post("/api/tournaments/import")]
async fn api_import_tournament(state: AppState, query: Query<ImportQuery>, body: Bytes) -> HttpResponse {
    let query = query.into_inner();
    match players_from_csv(&body[..]) {
        Ok(players) => insert_tournament(&state, query.name, players, query.shuffle).await,
        Err(e) => bad_request(e),
    }
}

/// Get a tournament by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = state.write().await;
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(TournamentView::of(&entry.tournament))
        }
        None => no_tournament(),
    }
}

/// Report a score for one match; completed results flow through every bracket.
#[put("/api/tournaments/{id}/matches/{match_id}/score")]
async fn api_report_score(
    state: AppState,
    path: Path<TournamentMatchPath>,
    body: Json<ScoreBody>,
) -> HttpResponse {
    let mut g = state.write().await;
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return no_tournament(),
    };
    entry.last_activity = Instant::now();
    let t = &mut entry.tournament;
    let score = Score::new(body.player1, body.player2);
    match report_score(t, &path.match_id, score, body.status) {
        Ok(()) => HttpResponse::Ok().json(TournamentView::of(t)),
        Err(e) => bad_request(e),
    }
}

/// Play a match out with a random race-to score (demo brackets).
#[post("/api/tournaments/{id}/matches/{match_id}/simulate")]
async fn api_simulate_match(state: AppState, path: Path<TournamentMatchPath>) -> HttpResponse {
    let mut g = state.write().await;
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return no_tournament(),
    };
    entry.last_activity = Instant::now();
    let t = &mut entry.tournament;
    match simulate_and_report(t, &path.match_id, &mut rand::thread_rng()) {
        Ok(_) => HttpResponse::Ok().json(TournamentView::of(t)),
        Err(e) => bad_request(e),
    }
}

#[get("/api/tournaments/{id}/semi-final/ready")]
async fn api_semi_final_ready(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let g = state.read().await;
    match g.get(&path.id) {
        Some(entry) => {
            let t = &entry.tournament;
            HttpResponse::Ok().json(serde_json::json!({
                "ready": can_start_semi_final(&t.winners, &t.losers)
            }))
        }
        None => no_tournament(),
    }
}

/// Champion, runner-up and third places; `{}` while the final is undecided.
#[get("/api/tournaments/{id}/results")]
async fn api_results(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let g = state.read().await;
    match g.get(&path.id) {
        Some(entry) => HttpResponse::Ok().json(get_tournament_results(&entry.tournament.semi_finals)),
        None => no_tournament(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    log::info!("Starting server at http://{}:{}", config.host, config.port);

    let state: AppState = Data::new(RwLock::new(HashMap::new()));

    // Background task: drop tournaments with no activity for `inactivity_timeout`.
    let state_cleanup = state.clone();
    let cleanup_interval = config.cleanup_interval;
    let inactivity_timeout = config.inactivity_timeout;
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(cleanup_interval);
        loop {
            interval.tick().await;
            let mut g = state_cleanup.write().await;
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < inactivity_timeout);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive tournament(s)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_import_tournament)
            .service(api_create_tournament)
            .service(api_get_tournament)
            .service(api_report_score)
            .service(api_simulate_match)
            .service(api_semi_final_ready)
            .service(api_results)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
