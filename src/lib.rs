// src/lib.rs

//! Fedora distgit batch jobs: pull-request event crawler and maintainer mailer.

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod storage;
pub mod utils;
