pub mod av_transport;
