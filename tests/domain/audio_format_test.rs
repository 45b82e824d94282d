use skriva::domain::AudioFormat;

#[test]
fn given_known_mime_types_when_parsing_then_formats_are_recognized() {
    assert_eq!(AudioFormat::from_mime("audio/mpeg"), Some(AudioFormat::Mp3));
    assert_eq!(AudioFormat::from_mime("audio/mp3"), Some(AudioFormat::Mp3));
    assert_eq!(AudioFormat::from_mime("audio/wav"), Some(AudioFormat::Wav));
    assert_eq!(AudioFormat::from_mime("audio/webm"), Some(AudioFormat::Webm));
    assert_eq!(AudioFormat::from_mime("audio/ogg"), Some(AudioFormat::Ogg));
    assert_eq!(AudioFormat::from_mime("video/mp4"), Some(AudioFormat::Mp4));
}

#[test]
fn given_non_audio_mime_when_parsing_then_returns_none() {
    assert_eq!(AudioFormat::from_mime("text/plain"), None);
    assert_eq!(AudioFormat::from_mime("application/pdf"), None);
}

#[test]
fn given_each_format_when_queried_then_extension_matches_container() {
    assert_eq!(AudioFormat::Mp3.file_extension(), "mp3");
    assert_eq!(AudioFormat::Wav.file_extension(), "wav");
    assert_eq!(AudioFormat::Webm.file_extension(), "webm");
    assert_eq!(AudioFormat::Ogg.file_extension(), "ogg");
    assert_eq!(AudioFormat::Mp4.file_extension(), "mp4");
}
