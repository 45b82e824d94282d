mod local_audio_store_test;
mod memory_transcript_store_test;
mod mock_engine_test;
