pub mod frame_buffer;
pub mod interleave;
pub mod wav_format;
