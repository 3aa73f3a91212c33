mod common;
mod domestic;
mod ranking;
