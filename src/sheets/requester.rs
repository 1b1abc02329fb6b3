//! HTTP client for the Google Sheets v4 API.
//!
//! This module provides the [`SheetsRequester`] struct for reading and writing
//! rows of a spreadsheet through the `values` endpoints.

use std::time::Duration;

use log::{debug, info};
use mockall::automock;
use reqwest::{Client, Response};

use crate::sheets::{SheetsError, response_structs::ValueRange};

/// Trait for reading and writing rows of the spreadsheet.
///
/// This trait abstracts the data source for easier testing with mocks.
/// Ranges use the A1 notation, see [`crate::sheets::Table`].
#[automock]
pub trait Requester {
    /// Reads every row of the range.
    async fn read(&self, range: &str) -> Result<Vec<Vec<String>>, SheetsError>;
    /// Appends a row after the last row of the table targeted by the range.
    async fn append(&self, range: &str, row: Vec<String>) -> Result<(), SheetsError>;
    /// Overwrites the row targeted by the range.
    async fn update(&self, range: &str, row: Vec<String>) -> Result<(), SheetsError>;
}

/// HTTP client for a single spreadsheet.
///
/// # Examples
///
/// ```no_run
/// let requester = SheetsRequester::new(
///     "https://sheets.googleapis.com",
///     "spreadsheet_id",
///     "access_token",
///     Duration::from_secs(10),
/// )?;
/// let rows = requester.read("books_master!A:G").await?;
/// ```
pub struct SheetsRequester {
    /// Base url of the api, `https://sheets.googleapis.com` in production
    url: String,
    /// Id of the spreadsheet, found in its url
    spreadsheet_id: String,
    /// OAuth access token sent as a bearer token
    access_token: String,
    /// HTTP client
    client: Client,
}

impl SheetsRequester {
    /// Create a new [SheetsRequester].
    ///
    /// # Arguments
    ///
    /// * `url` - The base URL of the Sheets API.
    /// * `spreadsheet_id` - The id of the spreadsheet holding the tables.
    /// * `access_token` - The OAuth access token.
    /// * `timeout` - Timeout applied to every request.
    pub fn new(
        url: &str,
        spreadsheet_id: &str,
        access_token: &str,
        timeout: Duration,
    ) -> Result<Self, SheetsError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(SheetsRequester {
            url: url.trim_end_matches('/').to_string(),
            spreadsheet_id: spreadsheet_id.to_string(),
            access_token: access_token.to_string(),
            client,
        })
    }

    fn values_url(&self, range: &str) -> String {
        format!(
            "{}/v4/spreadsheets/{}/values/{}",
            &self.url, &self.spreadsheet_id, range
        )
    }

    fn check_status(response: Response) -> Result<Response, SheetsError> {
        let status = response.status();
        if !status.is_success() {
            return Err(SheetsError::Status(status.as_u16()));
        }
        Ok(response)
    }
}

impl Requester for SheetsRequester {
    /// Request `GET /v4/spreadsheets/{id}/values/{range}`.
    ///
    /// The api answers with a [`ValueRange`] whose cells may be strings,
    /// numbers or booleans. Every cell is converted into a string.
    async fn read(&self, range: &str) -> Result<Vec<Vec<String>>, SheetsError> {
        let url = self.values_url(range);
        info!("request rows of {}", range);
        debug!("request GET {}", &url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;
        let value_range: ValueRange = Self::check_status(response)?.json().await?;

        debug!("response from {} -> {:?}", &url, &value_range);

        Ok(value_range.into_rows())
    }

    /// Request `POST /v4/spreadsheets/{id}/values/{range}:append`.
    async fn append(&self, range: &str, row: Vec<String>) -> Result<(), SheetsError> {
        let url = format!("{}:append", self.values_url(range));
        info!("append row to {}", range);
        debug!("request POST {} with {:?}", &url, &row);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.access_token)
            .query(&[
                ("valueInputOption", "RAW"),
                ("insertDataOption", "INSERT_ROWS"),
            ])
            .json(&ValueRange::from_row(row))
            .send()
            .await?;
        Self::check_status(response)?;

        Ok(())
    }

    /// Request `PUT /v4/spreadsheets/{id}/values/{range}`.
    async fn update(&self, range: &str, row: Vec<String>) -> Result<(), SheetsError> {
        let url = self.values_url(range);
        info!("update row {}", range);
        debug!("request PUT {} with {:?}", &url, &row);

        let response = self
            .client
            .put(&url)
            .bearer_auth(&self.access_token)
            .query(&[("valueInputOption", "RAW")])
            .json(&ValueRange::from_row(row))
            .send()
            .await?;
        Self::check_status(response)?;

        Ok(())
    }
}
