/*!
# Twalyze

A small web application that pretends to analyze a post from Twitter/X and
records every result in a Google Sheet.

## Overview

The user pastes a post URL into the page. The server checks that the URL has
the shape of a status link, picks one record from a fixed list of mock
results and returns it. The page renders the record straight away and then
sends it to the relay, which appends it as a new row to the spreadsheet.
There is no real analysis: every result comes from the mock list.

## Architecture

### Frontend Layer
- **Technologies**: HTML, CSS, plain JavaScript embedded in the binary
- Form with URL input, inline error line and result card
- Relay failures show up as an error banner after the result is rendered

### Backend Layer
- **Technologies**: Rust, axum, reqwest
- **Core Components**:
  - URL Validator - Regex check for `http(s)://(www.)twitter.com|x.com/.../status/<digits>`
  - Mock Selector - Uniform random pick from the static record list
  - Submission Relay - Google Sheets `values:append` with `USER_ENTERED` input
  - Service Account Auth - RS256 JWT assertion exchanged for an access token

## Modules

- **record**: AnalysisRecord and Sentiment
- **validator**: URL shape check
- **mock**: Static mock records and random selection
- **config**: Environment configuration
- **auth**: Service account JWT signing and token exchange
- **sheets**: Google Sheets append client
- **error**: Relay error type
- **app**: Routing and handlers

## REST API Endpoints

- `GET /` - The page
- `POST /api/analyze` - `{url}` to a mock record, or 422 with a localized error
- `POST /api/add-to-sheet` - Record to `{success: true}`, or 500 with `{success: false, error}`
*/

pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod mock;
pub mod record;
pub mod sheets;
pub mod validator;

pub use config::{Config, SheetsConfig};
pub use error::{RelayError, RelayResult};
pub use record::{AnalysisRecord, Sentiment};
