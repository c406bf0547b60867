mod event;
mod guild;
