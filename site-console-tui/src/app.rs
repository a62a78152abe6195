//!
//! app.rs
//! 应用主循环
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit{ break }                     // 检查 APP 是否应该退出
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event , &app);           // 接收原始事件并分发消息
//!         if busy_label(&msg) { 先重绘一次提示 }           // 远程调用前在状态栏显示进行中
//!         update::update(&mut app , msg).await            // 更新状态（等待远程调用完成）
//!     }
//! }
//!
//! 由于每条消息都等待 `update` 完成后才轮询下一个事件，
//! 同一时刻最多只有一个变更请求在进行。

use std::time::Duration;

use anyhow::Result;

use crate::event;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub async fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    // 0. 首次加载服务端状态
    app.busy = Some("Loading...");
    terminal.draw(|frame| view::render(app, frame))?;
    update::initial_load(app).await;
    app.busy = None;

    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 4. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 5. 远程操作先提示进行中
            if let Some(label) = update::busy_label(app, &msg) {
                app.busy = Some(label);
                terminal.draw(|frame| view::render(app, frame))?;
            }

            // 6. 更新状态
            update::update(app, msg).await;
            app.busy = None;
        }
    }

    Ok(())
}
