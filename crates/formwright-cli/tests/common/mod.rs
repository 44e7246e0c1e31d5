#![allow(dead_code)]

use std::cell::RefCell;
use std::io::{self, Cursor};
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use formwright_cli::TerminalPlayer;
use tokio::io::AsyncWrite;

/// Everything the terminal host printed
#[derive(Debug, Clone, Default)]
pub struct Output(Rc<RefCell<Vec<u8>>>);

impl Output {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl AsyncWrite for Output {
    fn poll_write(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        self.0.borrow_mut().extend_from_slice(buf);
        Poll::Ready(Ok(buf.len()))
    }

    fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }
}

/// Player that types `input` and whose screen is the returned [`Output`]
pub fn scripted_player(input: &str) -> (TerminalPlayer, Output) {
    let output = Output::default();
    let player = TerminalPlayer::new(Cursor::new(input.as_bytes().to_vec()), output.clone());
    (player, output)
}
