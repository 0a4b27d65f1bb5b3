mod compositor;
mod export;
