use paxlist_core::{
    download, share, to_delimited_text, ExportError, ExportFile, NoFileShare, PassengerRecord,
    PassengerService, SharePort, ShareRequest, EXPORT_FILE_NAME, EXPORT_MIME_TYPE, SHARE_TITLE,
};
use std::cell::RefCell;

/// Share port double that records requests.
struct RecordingShare {
    capable: bool,
    reject_with: Option<String>,
    requests: RefCell<Vec<ShareRequest>>,
}

impl RecordingShare {
    fn capable() -> Self {
        Self {
            capable: true,
            reject_with: None,
            requests: RefCell::new(Vec::new()),
        }
    }

    fn incapable() -> Self {
        Self {
            capable: false,
            ..Self::capable()
        }
    }
}

impl SharePort for RecordingShare {
    fn supports_file_share(&self, file: &ExportFile) -> bool {
        self.capable && file.mime_type == EXPORT_MIME_TYPE
    }

    fn share(&self, request: &ShareRequest) -> Result<(), String> {
        self.requests.borrow_mut().push(request.clone());
        match &self.reject_with {
            Some(reason) => Err(reason.clone()),
            None => Ok(()),
        }
    }
}

fn two_passengers() -> PassengerService {
    let mut service = PassengerService::in_memory();
    service.save("Ana", "529.982.247-25").unwrap();
    service.save("Bruno", "111.444.777-35").unwrap();
    service
}

#[test]
fn single_record_text_has_no_newline() {
    let records = vec![PassengerRecord::new(1, "Ana", "12345678901")];
    assert_eq!(to_delimited_text(&records).unwrap(), "Ana;12345678901");
}

#[test]
fn records_are_joined_in_list_order_without_header() {
    let service = two_passengers();
    let text = to_delimited_text(service.records()).unwrap();
    assert_eq!(text, "Ana;52998224725\nBruno;11144477735");
}

#[test]
fn empty_list_aborts_export() {
    let service = PassengerService::in_memory();
    let dir = tempfile::tempdir().unwrap();

    assert!(matches!(service.export_file(), Err(ExportError::EmptyList)));
    assert!(matches!(
        to_delimited_text(service.records()),
        Err(ExportError::EmptyList)
    ));
    assert!(matches!(
        service.download_to(dir.path()),
        Err(ExportError::EmptyList)
    ));
    assert!(!dir.path().join(EXPORT_FILE_NAME).exists());
}

#[test]
fn export_file_uses_fixed_name_and_mime_type() {
    let file = two_passengers().export_file().unwrap();
    assert_eq!(file.file_name, "passageiros.csv");
    assert_eq!(file.mime_type, "text/csv");
}

#[test]
fn download_writes_delimited_text() {
    let service = two_passengers();
    let dir = tempfile::tempdir().unwrap();

    let path = service.download_to(dir.path()).unwrap();
    assert_eq!(path, dir.path().join(EXPORT_FILE_NAME));
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "Ana;52998224725\nBruno;11144477735"
    );
}

#[test]
fn download_into_missing_directory_reports_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing");
    let file = ExportFile::new("Ana;52998224725");

    let err = download(&file, &missing).unwrap_err();
    assert!(matches!(err, ExportError::Io { .. }));
    assert_eq!(err.notice(), "Could not save the passenger file.");
}

#[test]
fn share_without_capability_shows_notice_and_skips_port() {
    let port = RecordingShare::incapable();
    let err = two_passengers().share_with(&port).unwrap_err();

    assert!(matches!(err, ExportError::ShareUnsupported));
    assert_eq!(err.notice(), "Your device does not support direct sharing.");
    assert!(port.requests.borrow().is_empty());
}

#[test]
fn share_with_capability_forwards_title_and_file() {
    let port = RecordingShare::capable();
    two_passengers().share_with(&port).unwrap();

    let requests = port.requests.borrow();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].title, SHARE_TITLE);
    assert_eq!(requests[0].file.file_name, EXPORT_FILE_NAME);
    assert_eq!(
        requests[0].file.contents,
        "Ana;52998224725\nBruno;11144477735"
    );
}

#[test]
fn share_rejection_is_reported() {
    let port = RecordingShare {
        reject_with: Some("dismissed".to_string()),
        ..RecordingShare::capable()
    };
    let file = ExportFile::new("Ana;52998224725");

    let err = share(&file, &port).unwrap_err();
    assert!(matches!(err, ExportError::ShareFailed(ref reason) if reason == "dismissed"));
}

#[test]
fn no_file_share_port_is_never_capable() {
    let err = two_passengers().share_with(&NoFileShare).unwrap_err();
    assert!(matches!(err, ExportError::ShareUnsupported));
}
