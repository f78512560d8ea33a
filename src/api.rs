// Copyright (c) 2025 Finboard Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Blocking client for the remote ledger API. The engine never talks to the
//! network; commands fetch through this client and hand the decoded records
//! over. Transport failures (connect errors, non-2xx, timeouts) surface as
//! anyhow errors with the request named in the context chain.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{
    FinancialGoal, FixedExpense, NewFinancialGoal, NewFixedExpense, NewReport, NewTransaction,
    Report, Transaction, UserSettings,
};
use crate::utils::http_client;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// True when the error chain bottoms out in an HTTP 404. Callers use this to
/// tell "resource does not exist" apart from transport failures, which must
/// keep propagating.
pub fn is_not_found(err: &anyhow::Error) -> bool {
    err.downcast_ref::<reqwest::Error>()
        .and_then(reqwest::Error::status)
        == Some(reqwest::StatusCode::NOT_FOUND)
}
pub const BASE_URL_ENV: &str = "FINBOARD_API_URL";
pub const TOKEN_ENV: &str = "FINBOARD_API_TOKEN";

pub struct ApiClient {
    base: String,
    token: Option<String>,
    http: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(base: impl Into<String>, token: Option<String>) -> Result<Self> {
        let base = base.into().trim_end_matches('/').to_string();
        Ok(ApiClient {
            base,
            token,
            http: http_client()?,
        })
    }

    /// Base URL from the environment, localhost default, token attached to
    /// every request when configured.
    pub fn from_env() -> Result<Self> {
        let base = std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let token = std::env::var(TOKEN_ENV).ok();
        Self::new(base, token)
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn authed(&self, req: reqwest::blocking::RequestBuilder) -> reqwest::blocking::RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let resp = self
            .authed(self.http.get(self.url(path)))
            .send()
            .and_then(|r| r.error_for_status())
            .with_context(|| format!("GET {}", path))?;
        resp.json().with_context(|| format!("Decode GET {}", path))
    }

    fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let resp = self
            .authed(self.http.post(self.url(path)))
            .json(body)
            .send()
            .and_then(|r| r.error_for_status())
            .with_context(|| format!("POST {}", path))?;
        resp.json().with_context(|| format!("Decode POST {}", path))
    }

    fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let resp = self
            .authed(self.http.put(self.url(path)))
            .json(body)
            .send()
            .and_then(|r| r.error_for_status())
            .with_context(|| format!("PUT {}", path))?;
        resp.json().with_context(|| format!("Decode PUT {}", path))
    }

    fn delete(&self, path: &str) -> Result<()> {
        self.authed(self.http.delete(self.url(path)))
            .send()
            .and_then(|r| r.error_for_status())
            .with_context(|| format!("DELETE {}", path))?;
        Ok(())
    }

    // Transactions

    pub fn transactions(&self) -> Result<Vec<Transaction>> {
        self.get("/api/transactions")
    }

    pub fn transaction(&self, id: &str) -> Result<Transaction> {
        self.get(&format!("/api/transactions/{}", id))
    }

    pub fn create_transaction(&self, tx: &NewTransaction) -> Result<Transaction> {
        self.post("/api/transactions", tx)
    }

    pub fn update_transaction(&self, id: &str, tx: &Transaction) -> Result<Transaction> {
        self.put(&format!("/api/transactions/{}", id), tx)
    }

    pub fn delete_transaction(&self, id: &str) -> Result<()> {
        self.delete(&format!("/api/transactions/{}", id))
    }

    pub fn transactions_in_range(&self, start: &str, end: &str) -> Result<Vec<Transaction>> {
        self.get(&format!(
            "/api/transactions/range?startDate={}&endDate={}",
            start, end
        ))
    }

    pub fn transactions_by_category(&self, category: &str) -> Result<Vec<Transaction>> {
        self.get(&format!("/api/transactions/category/{}", category))
    }

    // Fixed expenses

    pub fn fixed_expenses(&self) -> Result<Vec<FixedExpense>> {
        self.get("/api/fixed-expenses")
    }

    pub fn fixed_expense(&self, id: i64) -> Result<FixedExpense> {
        self.get(&format!("/api/fixed-expenses/{}", id))
    }

    pub fn create_fixed_expense(&self, expense: &NewFixedExpense) -> Result<FixedExpense> {
        self.post("/api/fixed-expenses", expense)
    }

    pub fn update_fixed_expense(&self, id: i64, expense: &FixedExpense) -> Result<FixedExpense> {
        self.put(&format!("/api/fixed-expenses/{}", id), expense)
    }

    pub fn delete_fixed_expense(&self, id: i64) -> Result<()> {
        self.delete(&format!("/api/fixed-expenses/{}", id))
    }

    pub fn active_fixed_expenses(&self) -> Result<Vec<FixedExpense>> {
        self.get("/api/fixed-expenses/active")
    }

    pub fn fixed_expenses_by_category(&self, category: &str) -> Result<Vec<FixedExpense>> {
        self.get(&format!("/api/fixed-expenses/category/{}", category))
    }

    // Financial goals

    pub fn goals(&self) -> Result<Vec<FinancialGoal>> {
        self.get("/api/goals")
    }

    pub fn goal(&self, id: i64) -> Result<FinancialGoal> {
        self.get(&format!("/api/goals/{}", id))
    }

    pub fn create_goal(&self, goal: &NewFinancialGoal) -> Result<FinancialGoal> {
        self.post("/api/goals", goal)
    }

    pub fn update_goal(&self, id: i64, goal: &FinancialGoal) -> Result<FinancialGoal> {
        self.put(&format!("/api/goals/{}", id), goal)
    }

    pub fn delete_goal(&self, id: i64) -> Result<()> {
        self.delete(&format!("/api/goals/{}", id))
    }

    pub fn active_goals(&self) -> Result<Vec<FinancialGoal>> {
        self.get("/api/goals/active")
    }

    // Reports

    pub fn reports(&self) -> Result<Vec<Report>> {
        self.get("/api/reports")
    }

    pub fn report(&self, id: i64) -> Result<Report> {
        self.get(&format!("/api/reports/{}", id))
    }

    pub fn create_report(&self, report: &NewReport) -> Result<Report> {
        self.post("/api/reports", report)
    }

    pub fn update_report(&self, id: i64, report: &Report) -> Result<Report> {
        self.put(&format!("/api/reports/{}", id), report)
    }

    pub fn delete_report(&self, id: i64) -> Result<()> {
        self.delete(&format!("/api/reports/{}", id))
    }

    pub fn reports_by_type(&self, report_type: &str) -> Result<Vec<Report>> {
        self.get(&format!("/api/reports/type/{}", report_type))
    }

    pub fn reports_by_status(&self, status: &str) -> Result<Vec<Report>> {
        self.get(&format!("/api/reports/status/{}", status))
    }

    // Settings (singleton)

    pub fn settings(&self) -> Result<UserSettings> {
        self.get("/api/settings")
    }

    pub fn create_settings(&self, settings: &UserSettings) -> Result<UserSettings> {
        self.post("/api/settings", settings)
    }

    pub fn update_settings(&self, settings: &UserSettings) -> Result<UserSettings> {
        self.put("/api/settings", settings)
    }

    pub fn delete_settings(&self) -> Result<()> {
        self.delete("/api/settings")
    }
}
