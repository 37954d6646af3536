//!
//! app.rs
//! 应用主循环
//!
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! 应用的主循环中有：
//! loop {
//!
//!     backend.dispatch(app.take_commands())           // 把 update 排队的命令交给后台任务
//!     while let Ok(ev) = events.try_recv() {          // 收取已完成的后台调用
//!         update::update(&mut app , Backend(ev))
//!     }
//!     update::update(&mut app , Tick)                 // 过期通知在这里清除
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit{ break }                     // 检查 APP 是否应该退出
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event , &app);           // 接收原始事件并分发消息
//!         update::update(&mut app , msg)                  // 更新终端状态
//!     }
//! }
//!
//!
//! 由按键产生的命令在下一轮开头才会发出；
//! 后台结果最迟在一次轮询超时后被渲染。

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::{Backend, BackendEvent};
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    backend: &Backend,
    mut events: UnboundedReceiver<BackendEvent>,
) -> Result<()> {
    loop {
        // 1. 发出排队的后台命令
        for command in app.take_commands() {
            backend.dispatch(command);
        }

        // 2. 应用已完成的后台调用
        while let Ok(event) = events.try_recv() {
            update::update(app, AppMessage::Backend(event));
        }
        update::update(app, AppMessage::Tick);

        // 3. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 4. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 5. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }
    }

    log::info!("main loop finished");
    Ok(())
}
