mod props;
mod typed;
