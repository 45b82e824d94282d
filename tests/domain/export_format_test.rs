use skriva::domain::ExportFormat;

#[test]
fn given_known_params_when_parsing_then_each_format_is_recognized() {
    assert_eq!(ExportFormat::from_param("text"), Some(ExportFormat::Text));
    assert_eq!(ExportFormat::from_param("srt"), Some(ExportFormat::Srt));
    assert_eq!(ExportFormat::from_param("vtt"), Some(ExportFormat::Vtt));
    assert_eq!(ExportFormat::from_param("json"), Some(ExportFormat::Json));
}

#[test]
fn given_mixed_case_param_when_parsing_then_format_is_recognized() {
    assert_eq!(ExportFormat::from_param("SRT"), Some(ExportFormat::Srt));
    assert_eq!(ExportFormat::from_param("Json"), Some(ExportFormat::Json));
}

#[test]
fn given_unknown_param_when_parsing_then_returns_none() {
    assert_eq!(ExportFormat::from_param("docx"), None);
    assert_eq!(ExportFormat::from_param(""), None);
}

#[test]
fn given_each_format_when_queried_then_mime_and_extension_match() {
    assert_eq!(ExportFormat::Text.as_mime(), "text/plain");
    assert_eq!(ExportFormat::Text.file_extension(), "txt");
    assert_eq!(ExportFormat::Srt.as_mime(), "application/x-subrip");
    assert_eq!(ExportFormat::Srt.file_extension(), "srt");
    assert_eq!(ExportFormat::Vtt.as_mime(), "text/vtt");
    assert_eq!(ExportFormat::Vtt.file_extension(), "vtt");
    assert_eq!(ExportFormat::Json.as_mime(), "application/json");
    assert_eq!(ExportFormat::Json.file_extension(), "json");
}
