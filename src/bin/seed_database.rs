#!/usr/bin/env cargo
//! Atrium Database Seeder
//!
//! A terminal application for seeding the Atrium content database with
//! realistic demo data: project types, showcase projects with galleries,
//! hero images, client logos, and a handful of open inquiries.
//!
//! Usage:
//!   `cargo run --bin seed_database -- --url http://localhost:3000 --token YOUR_JWT_TOKEN`
//!
//! Everything goes through the public HTTP API so the seeded rows take the
//! exact same code path as the admin UI.

use anyhow::{Context, anyhow};
use clap::{Arg, Command};
use console::style;
use futures::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct SeedingConfig {
    pub base_url: String,
    pub jwt_token: String,
    pub client: Client,
}

#[derive(Debug, Default)]
pub struct CreatedObjects {
    pub project_types: Vec<Value>,
    pub projects: Vec<Value>,
    pub hero_images: Vec<Value>,
    pub client_logos: Vec<Value>,
    pub inquiries: Vec<Value>,
}

pub struct DatabaseSeeder {
    config: SeedingConfig,
    created_objects: CreatedObjects,
}

const PROJECT_TYPES: &[(&str, &str)] = &[
    ("csr", "Corporate social responsibility events"),
    ("team_building", "Team building programs"),
    ("corporate_event", "Conferences, galas and launches"),
    ("training_program", "Leadership and skills training"),
];

const CLIENTS: &[&str] = &[
    "Helvetia Partners",
    "Nordwind Logistics",
    "Cobalt Financial",
    "Verde Pharma",
    "Oris & Sons",
];

impl DatabaseSeeder {
    pub fn new(base_url: String, jwt_token: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap();

        Self {
            config: SeedingConfig {
                base_url: base_url.trim_end_matches('/').to_string(),
                jwt_token,
                client,
            },
            created_objects: CreatedObjects::default(),
        }
    }

    async fn make_request(
        &self,
        method: &str,
        endpoint: &str,
        data: Option<Value>,
    ) -> anyhow::Result<Value> {
        let url = format!("{}{}", self.config.base_url, endpoint);

        let response = match method.to_uppercase().as_str() {
            "GET" => {
                self.config
                    .client
                    .get(&url)
                    .header("authorization", format!("Bearer {}", self.config.jwt_token))
                    .send()
                    .await?
            }
            "POST" => {
                let mut request = self
                    .config
                    .client
                    .post(&url)
                    .header("authorization", format!("Bearer {}", self.config.jwt_token))
                    .header("content-type", "application/json");
                if let Some(json_data) = data {
                    request = request.json(&json_data);
                }
                request.send().await?
            }
            other => return Err(anyhow!("Unsupported HTTP method: {other}")),
        };

        if response.status().is_success() {
            response
                .json::<Value>()
                .await
                .context("JSON parse error in API response")
        } else {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            Err(anyhow!("HTTP {status} {endpoint}: {error_text}"))
        }
    }

    /// Run several POST requests concurrently, collecting the created rows
    async fn post_many(
        &self,
        endpoint: &str,
        payloads: Vec<Value>,
        pb: &ProgressBar,
    ) -> anyhow::Result<Vec<Value>> {
        let tasks = payloads.into_iter().map(|payload| {
            let pb = pb.clone();
            async move {
                let result = self.make_request("POST", endpoint, Some(payload)).await;
                pb.inc(1);
                result
            }
        });

        join_all(tasks).await.into_iter().collect()
    }

    fn progress_bar(count: u64, label: &str) -> ProgressBar {
        let pb = ProgressBar::new(count);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{msg:<24} [{bar:30.cyan/blue}] {pos}/{len}")
                .unwrap()
                .progress_chars("##-"),
        );
        pb.set_message(label.to_string());
        pb
    }

    async fn create_project_types(&mut self) -> anyhow::Result<()> {
        let pb = Self::progress_bar(PROJECT_TYPES.len() as u64, "Project types");

        let payloads = PROJECT_TYPES
            .iter()
            .enumerate()
            .map(|(order, (key, description))| {
                json!({
                    "type_key": key,
                    "description": description,
                    "display_order": order
                })
            })
            .collect();

        self.created_objects.project_types =
            self.post_many("/api/project-types", payloads, &pb).await?;
        pb.finish();
        Ok(())
    }

    async fn create_projects(&mut self) -> anyhow::Result<()> {
        let mut rng = rand::rng();
        let pb = Self::progress_bar(CLIENTS.len() as u64, "Projects");

        let payloads = CLIENTS
            .iter()
            .enumerate()
            .map(|(order, client)| {
                let type_row = &self.created_objects.project_types
                    [order % self.created_objects.project_types.len()];
                let year = rng.random_range(2021..=2025);
                let image_count = rng.random_range(2..=4);

                let gallery: Vec<Value> = (0..image_count)
                    .map(|i| {
                        json!({
                            "url": format!(
                                "https://cdn.atrium.events/projects/{}-{i}.webp",
                                client.to_lowercase().replace([' ', '&'], "-")
                            ),
                            "alt": format!("{client} event photo {}", i + 1),
                            "display_order": i
                        })
                    })
                    .collect();

                json!({
                    "title": format!("{client} {year}"),
                    "category": type_row["type_key"],
                    "summary": format!("Flagship {} for {client}", type_row["description"].as_str().unwrap_or("event").to_lowercase()),
                    "description": "Full-service planning, production and on-site coordination.",
                    "year": year,
                    "client": client,
                    "display_order": order,
                    "is_active": true,
                    "is_featured": order < 2,
                    "project_type_id": type_row["id"],
                    "gallery": gallery
                })
            })
            .collect();

        self.created_objects.projects = self.post_many("/api/projects", payloads, &pb).await?;
        pb.finish();
        Ok(())
    }

    async fn create_hero_images(&mut self) -> anyhow::Result<()> {
        let pb = Self::progress_bar(3, "Hero images");

        let payloads = (0..3)
            .map(|i| {
                json!({
                    "url": format!("https://cdn.atrium.events/hero/banner-{i}.webp"),
                    "alt": "Event stage at night",
                    "is_active": true,
                    "display_order": i
                })
            })
            .collect();

        self.created_objects.hero_images =
            self.post_many("/api/hero-images", payloads, &pb).await?;
        pb.finish();
        Ok(())
    }

    async fn create_client_logos(&mut self) -> anyhow::Result<()> {
        let pb = Self::progress_bar(CLIENTS.len() as u64, "Client logos");

        let payloads = CLIENTS
            .iter()
            .enumerate()
            .map(|(order, client)| {
                json!({
                    "name": client,
                    "url": format!(
                        "https://cdn.atrium.events/logos/{}.svg",
                        client.to_lowercase().replace([' ', '&'], "-")
                    ),
                    "is_active": true,
                    "display_order": order
                })
            })
            .collect();

        self.created_objects.client_logos =
            self.post_many("/api/client-logos", payloads, &pb).await?;
        pb.finish();
        Ok(())
    }

    async fn create_inquiries(&mut self) -> anyhow::Result<()> {
        let mut rng = rand::rng();
        let pb = Self::progress_bar(4, "Inquiries");

        let services = ["csr", "team_building", "corporate_event", "training_program"];
        let payloads = services
            .iter()
            .enumerate()
            .map(|(i, service)| {
                let mut payload = json!({
                    "service": service,
                    "contact_name": format!("Demo Contact {}", i + 1),
                    "company": CLIENTS[i % CLIENTS.len()],
                    "email": format!("contact{}@example.com", i + 1),
                    "participant_count": rng.random_range(10..=120),
                    "location": "Geneva",
                    "message": "Seeded inquiry for development and testing."
                });
                if *service == "training_program" {
                    payload["training_topic"] = json!("Leadership");
                    payload["training_audience"] = json!("Mid-level managers");
                }
                payload
            })
            .collect();

        self.created_objects.inquiries = self.post_many("/api/inquiries", payloads, &pb).await?;
        pb.finish();
        Ok(())
    }

    pub async fn seed_database(&mut self) -> anyhow::Result<()> {
        println!();
        println!("{}", style("Seeding the Atrium content database").bold());
        println!();

        // Health check before doing anything
        self.make_request("GET", "/healthz", None)
            .await
            .context("API is not reachable; is the server running?")?;

        self.create_project_types().await?;
        self.create_projects().await?;
        self.create_hero_images().await?;
        self.create_client_logos().await?;
        self.create_inquiries().await?;

        self.display_summary();

        Ok(())
    }

    fn display_summary(&self) {
        println!();
        println!("{}", style("Database seeding complete").bold().green());
        println!("{}", style("=".repeat(40)).dim());

        let summary_data = vec![
            ("Project types", self.created_objects.project_types.len()),
            ("Projects", self.created_objects.projects.len()),
            ("Hero images", self.created_objects.hero_images.len()),
            ("Client logos", self.created_objects.client_logos.len()),
            ("Inquiries", self.created_objects.inquiries.len()),
        ];

        for (name, count) in summary_data {
            if count > 0 {
                println!(
                    "{:.<20} {}",
                    style(name).cyan(),
                    style(count).bold().green()
                );
            }
        }
        println!();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let matches = Command::new("Atrium Database Seeder")
        .version("1.0")
        .about("Seeds the Atrium content database with realistic demo data")
        .arg(
            Arg::new("url")
                .short('u')
                .long("url")
                .value_name("URL")
                .help("API base URL")
                .default_value("http://localhost:3000"),
        )
        .arg(
            Arg::new("token")
                .short('t')
                .long("token")
                .value_name("JWT_TOKEN")
                .help("JWT authentication token for the admin routes")
                .required(true),
        )
        .get_matches();

    let base_url = matches.get_one::<String>("url").unwrap().clone();
    let jwt_token = matches.get_one::<String>("token").unwrap().clone();

    println!("{}", style("Atrium Database Seeder v1.0").bold());
    println!("API URL: {}", style(&base_url).cyan());

    let mut seeder = DatabaseSeeder::new(base_url, jwt_token);
    seeder.seed_database().await?;

    Ok(())
}
