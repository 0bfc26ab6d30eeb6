mod events;
mod units;
