pub mod output;
pub mod renderer;
pub mod report_cmd;
