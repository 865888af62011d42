mod position;
mod primary;
