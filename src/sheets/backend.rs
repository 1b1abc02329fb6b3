//! Data source selected at startup.

use crate::sheets::{
    SheetsError, local::LocalSheets, requester::Requester, requester::SheetsRequester,
};

/// Either the remote spreadsheet or its local stand-in.
pub enum SheetsBackend {
    Remote(SheetsRequester),
    Local(LocalSheets),
}

impl Requester for SheetsBackend {
    async fn read(&self, range: &str) -> Result<Vec<Vec<String>>, SheetsError> {
        match self {
            SheetsBackend::Remote(requester) => requester.read(range).await,
            SheetsBackend::Local(sheets) => sheets.read(range).await,
        }
    }

    async fn append(&self, range: &str, row: Vec<String>) -> Result<(), SheetsError> {
        match self {
            SheetsBackend::Remote(requester) => requester.append(range, row).await,
            SheetsBackend::Local(sheets) => sheets.append(range, row).await,
        }
    }

    async fn update(&self, range: &str, row: Vec<String>) -> Result<(), SheetsError> {
        match self {
            SheetsBackend::Remote(requester) => requester.update(range, row).await,
            SheetsBackend::Local(sheets) => sheets.update(range, row).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheets::Table;

    #[tokio::test]
    async fn test_local_backend_delegates() {
        let backend = SheetsBackend::Local(LocalSheets::in_memory());
        backend
            .append(&Table::Books.range(), vec!["1".to_owned()])
            .await
            .unwrap();

        let rows = backend.read(&Table::Books.range()).await.unwrap();
        assert_eq!(rows, vec![vec!["1".to_owned()]]);
    }
}
