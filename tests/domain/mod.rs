mod audio_format_test;
mod export_format_test;
mod storage_path_test;
mod transcript_test;
